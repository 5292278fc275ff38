//! Shared pagination types for list operations.
//!
//! Listing is page-based: callers supply a 1-based `page` and a `limit`, and
//! receive the matching window together with metadata (`total`, `page`,
//! `last_page`) so they can render pagers without a second count query.

use serde::{Deserialize, Serialize};

/// Default number of items to return per page.
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum number of items that can be requested per page.
pub const MAX_LIMIT: i64 = 100;

/// Standard pagination parameters for list operations.
///
/// Both values are optional and are normalized on access:
/// - `page`: 1-based page number (default: 1, minimum: 1)
/// - `limit`: maximum items per page (default: 10, max: 100)
///
/// The `limit` is clamped to ensure it's always between 1 and 100,
/// preventing both zero-result queries and excessive data fetching.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Pagination {
    /// 1-based page number (default: 1)
    pub page: Option<i64>,

    /// Maximum number of items to return (default: 10, max: 100)
    pub limit: Option<i64>,
}

impl Pagination {
    /// Get the page value, defaulting to 1 if not specified.
    #[inline]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Get the limit value, clamped between 1 and MAX_LIMIT.
    /// Defaults to DEFAULT_LIMIT if not specified.
    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Number of rows to skip for the requested window.
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

/// Pagination metadata returned alongside every listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Total number of items matching the query (before pagination)
    pub total: i64,
    /// The requested 1-based page number
    pub page: i64,
    /// Last page that contains any data: `ceil(total / limit)`
    pub last_page: i64,
}

impl PageMeta {
    /// Compute metadata for a listing. An empty collection has `last_page = 0`.
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        Self {
            total,
            page,
            last_page: (total + limit - 1) / limit,
        }
    }
}

/// Generic paginated response wrapper for list operations.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// The items for the current page
    pub data: Vec<T>,
    /// Pagination metadata
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { data, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let p = Pagination::default();
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), DEFAULT_LIMIT);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_limit_clamping() {
        // Zero is clamped to 1
        let p = Pagination {
            page: None,
            limit: Some(0),
        };
        assert_eq!(p.limit(), 1);

        // Negative is clamped to 1
        let p = Pagination {
            page: None,
            limit: Some(-5),
        };
        assert_eq!(p.limit(), 1);

        // Over max is clamped to MAX_LIMIT
        let p = Pagination {
            page: None,
            limit: Some(1000),
        };
        assert_eq!(p.limit(), MAX_LIMIT);

        // Valid value passes through
        let p = Pagination {
            page: None,
            limit: Some(50),
        };
        assert_eq!(p.limit(), 50);
    }

    #[test]
    fn test_page_clamping() {
        // Zero and negative pages are clamped to 1
        let p = Pagination {
            page: Some(0),
            limit: None,
        };
        assert_eq!(p.page(), 1);

        let p = Pagination {
            page: Some(-3),
            limit: None,
        };
        assert_eq!(p.page(), 1);

        // Valid value passes through
        let p = Pagination {
            page: Some(7),
            limit: None,
        };
        assert_eq!(p.page(), 7);
    }

    #[test]
    fn test_offset() {
        let p = Pagination {
            page: Some(3),
            limit: Some(25),
        };
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn test_last_page_rounds_up() {
        assert_eq!(PageMeta::new(0, 1, 10).last_page, 0);
        assert_eq!(PageMeta::new(1, 1, 10).last_page, 1);
        assert_eq!(PageMeta::new(10, 1, 10).last_page, 1);
        assert_eq!(PageMeta::new(11, 1, 10).last_page, 2);
        assert_eq!(PageMeta::new(21, 2, 10).last_page, 3);
    }
}
