//! Common type definitions.
//!
//! Entity IDs are store-assigned integers wrapped in type aliases for better
//! readability at call sites.

/// Identifier of a product row (`BIGSERIAL`, assigned by the store).
pub type ProductId = i64;
