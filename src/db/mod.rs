//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL,
//! following the Repository pattern:
//!
//! - [`handlers`]: repository implementations for CRUD operations
//! - [`models`]: database record structures matching table schemas
//! - [`errors`]: database-specific error types
//!
//! Repositories encapsulate all database access for one entity type and are
//! constructed over a borrowed connection or transaction, so callers decide
//! the transaction boundary.

pub mod errors;
pub mod handlers;
pub mod models;
