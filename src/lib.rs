//! # catalog: product catalog service
//!
//! `catalog` exposes CRUD operations plus soft-delete for a single products
//! collection, delegating all persistence to PostgreSQL. Records are never
//! physically destroyed: deleting a product flips its `available` flag, and
//! every other read and update path is scoped to available records only.
//!
//! ## Architecture
//!
//! The **service layer** ([`service::ProductsService`]) is a stateless façade
//! invoked by a collaborating request-routing layer. It holds a shared
//! [`sqlx::PgPool`] handle injected at construction and performs at most two
//! sequential store calls per operation.
//!
//! The **database layer** ([`db`]) uses the repository pattern to abstract
//! data access. The products repository handles query construction; the
//! update path uses a single atomic conditional update so there is no
//! check-then-act window between the existence check and the write.
//!
//! Exactly one domain error exists: [`errors::Error::NotFound`], raised when
//! a record matching id + availability cannot be located. All other failures
//! originate from the persistence layer and pass through unmodified.
//!
//! ## Quick Start
//!
//! ```no_run
//! use catalog::{Config, ProductsService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     catalog::telemetry::init_telemetry()?;
//!
//!     let config = Config::load("config.yaml")?;
//!     let pool = catalog::connect(&config).await?;
//!
//!     let service = ProductsService::new(pool);
//!     let products = service.find_all(&Default::default()).await?;
//!     println!("{} products", products.meta.total);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod pagination;
pub mod service;
pub mod telemetry;
pub mod types;

pub use config::Config;
pub use service::ProductsService;
pub use types::ProductId;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Get the catalog database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Connect to the configured database and run pending migrations.
pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    migrator().run(&pool).await?;
    Ok(pool)
}
