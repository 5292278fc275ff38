//! Database record models matching table schemas.
//!
//! These structs directly correspond to database table rows. They are used by
//! the repositories in [`crate::db::handlers`] to return query results and
//! accept insertion/update data.
//!
//! - **Schema Mapping**: each model struct matches a table schema
//! - **SQLx Integration**: row models derive `sqlx::FromRow`
//! - **Type Safety**: IDs use the aliases from [`crate::types`]

pub mod products;
