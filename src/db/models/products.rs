//! Database models for products.

use crate::types::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row.
///
/// `available = false` means the row is soft-deleted: it stays in the store
/// but is invisible to every read and update path except soft-delete itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database request for creating a new product.
///
/// `id`, `available` and the timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct ProductCreateDBRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

/// Database request for updating a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdateDBRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}
