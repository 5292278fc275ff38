//! Repository implementations for database access.
//!
//! Each repository:
//! - Wraps a SQLx connection or transaction
//! - Provides strongly-typed CRUD operations
//! - Handles query construction and parameter binding
//! - Returns domain models from [`crate::db::models`]
//!
//! All repositories follow this usage pattern:
//!
//! ```ignore
//! use catalog::db::handlers::{Products, Repository};
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Products::new(&mut conn);
//!
//!     let product = repo.create(&create_request).await?;
//!     Ok(())
//! }
//! ```

pub mod products;
pub mod repository;

pub use products::Products;
pub use repository::Repository;
