//! The product catalog service.
//!
//! [`ProductsService`] is a stateless façade over the products repository: it
//! holds a shared [`PgPool`] handle injected by the composition root and
//! performs one or two store calls per operation. Every operation resolves
//! before returning, including soft-delete.

use crate::db::{
    errors::DbError,
    handlers::{products::ProductFilter, Products, Repository},
    models::products::{Product, ProductCreateDBRequest, ProductUpdateDBRequest},
};
use crate::errors::{Error, Result};
use crate::pagination::{PageMeta, Paginated, Pagination};
use crate::types::ProductId;
use sqlx::PgPool;
use tracing::info;

/// Stateless CRUD service for the products collection.
#[derive(Clone)]
pub struct ProductsService {
    db: PgPool,
}

impl ProductsService {
    /// Create a service over an externally managed connection pool.
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Insert a new product. `available` is defaulted to true by the store.
    ///
    /// Constraint violations and connectivity errors from the store pass
    /// through untranslated as [`Error::Database`].
    #[tracing::instrument(skip_all)]
    pub async fn create(&self, request: &ProductCreateDBRequest) -> Result<Product> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let mut repo = Products::new(&mut conn);

        Ok(repo.create(request).await?)
    }

    /// List available products for the requested pagination window.
    ///
    /// `meta.total` counts all available products regardless of the window,
    /// and `meta.last_page` is `ceil(total / limit)`. A page past the end
    /// yields empty `data` with populated metadata, not an error.
    #[tracing::instrument(skip_all, fields(page = pagination.page(), limit = pagination.limit()))]
    pub async fn find_all(&self, pagination: &Pagination) -> Result<Paginated<Product>> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let mut repo = Products::new(&mut conn);

        let filter = ProductFilter::new(pagination.offset(), pagination.limit());
        let total = repo.count(&filter).await?;
        let data = repo.list(&filter).await?;

        let meta = PageMeta::new(total, pagination.page(), pagination.limit());
        Ok(Paginated::new(data, meta))
    }

    /// Look up an available product by id.
    ///
    /// Fails with [`Error::NotFound`] when the product does not exist or has
    /// been soft-deleted.
    #[tracing::instrument(skip_all, fields(product_id = id))]
    pub async fn find_one(&self, id: ProductId) -> Result<Product> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let mut repo = Products::new(&mut conn);

        info!("Finding product with id {id}");
        let product = repo.get_by_id(id).await?.ok_or_else(|| Error::product_not_found(id))?;
        info!(
            detail = %serde_json::to_string(&product).unwrap_or_default(),
            "Product with id {id} found"
        );

        Ok(product)
    }

    /// Apply the non-`None` fields to an available product.
    ///
    /// Existence, availability and the write are a single conditional update
    /// in the store, so there is no window for a concurrent soft-delete
    /// between check and write. Zero rows matched means [`Error::NotFound`]
    /// and nothing was written.
    #[tracing::instrument(skip_all, fields(product_id = id))]
    pub async fn update(&self, id: ProductId, request: &ProductUpdateDBRequest) -> Result<Product> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let mut repo = Products::new(&mut conn);

        match repo.update(id, request).await {
            Ok(product) => Ok(product),
            Err(DbError::NotFound) => Err(Error::product_not_found(id)),
            Err(err) => Err(err.into()),
        }
    }

    /// Soft-delete a product: set `available = false`, keep the row.
    ///
    /// Matches on `id` alone, so re-deleting an already soft-deleted product
    /// succeeds and returns the row unchanged. Only a completely unknown id
    /// fails with [`Error::NotFound`].
    #[tracing::instrument(skip_all, fields(product_id = id))]
    pub async fn remove(&self, id: ProductId) -> Result<Product> {
        let mut conn = self.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let mut repo = Products::new(&mut conn);

        match repo.delete(id).await {
            Ok(product) => Ok(product),
            Err(DbError::NotFound) => Err(Error::product_not_found(id)),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn new_product(name: &str, price: Decimal) -> ProductCreateDBRequest {
        ProductCreateDBRequest {
            name: name.to_string(),
            description: None,
            price,
        }
    }

    fn page(page: i64, limit: i64) -> Pagination {
        Pagination {
            page: Some(page),
            limit: Some(limit),
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_then_find_one_round_trips(pool: PgPool) {
        let service = ProductsService::new(pool);

        let created = service.create(&new_product("Pen", Decimal::from(1))).await.unwrap();
        assert!(created.available);

        let found = service.find_one(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_find_all_total_is_independent_of_window(pool: PgPool) {
        let service = ProductsService::new(pool);

        for i in 0..5 {
            service.create(&new_product(&format!("p{i}"), Decimal::from(i))).await.unwrap();
        }

        let first = service.find_all(&page(1, 2)).await.unwrap();
        assert_eq!(first.data.len(), 2);
        assert_eq!(first.meta, PageMeta { total: 5, page: 1, last_page: 3 });

        let last = service.find_all(&page(3, 2)).await.unwrap();
        assert_eq!(last.data.len(), 1);
        assert_eq!(last.meta.total, 5);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_find_all_past_last_page_is_empty_not_an_error(pool: PgPool) {
        let service = ProductsService::new(pool);

        service.create(&new_product("only", Decimal::from(3))).await.unwrap();

        let result = service.find_all(&page(9, 10)).await.unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.meta, PageMeta { total: 1, page: 9, last_page: 1 });
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_find_one_missing_carries_the_id(pool: PgPool) {
        let service = ProductsService::new(pool);

        let err = service.find_one(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Product with id 1 not found");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_missing_is_not_found(pool: PgPool) {
        let service = ProductsService::new(pool);

        let update = ProductUpdateDBRequest {
            price: Some(Decimal::from(2)),
            ..Default::default()
        };
        let err = service.update(4242, &update).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_remove_hides_but_retains_the_row(pool: PgPool) {
        let service = ProductsService::new(pool.clone());

        let created = service.create(&new_product("Pen", Decimal::from(1))).await.unwrap();

        let removed = service.remove(created.id).await.unwrap();
        assert!(!removed.available);

        let err = service.find_one(created.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));

        // The row is still in the store, just unavailable
        let row = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(!row.available);

        // Removing again is idempotent
        let removed_again = service.remove(created.id).await.unwrap();
        assert!(!removed_again.available);
    }

    /// The end-to-end scenario: create, list, remove, then observe NotFound
    /// from both lookup and update.
    #[sqlx::test]
    #[test_log::test]
    async fn test_pen_lifecycle(pool: PgPool) {
        let service = ProductsService::new(pool);

        let pen = service.create(&new_product("Pen", Decimal::from(1))).await.unwrap();
        assert!(pen.available);

        let listed = service.find_all(&page(1, 10)).await.unwrap();
        assert_eq!(listed.data.len(), 1);
        assert_eq!(listed.data[0].id, pen.id);
        assert_eq!(listed.meta, PageMeta { total: 1, page: 1, last_page: 1 });

        service.remove(pen.id).await.unwrap();

        let err = service.find_one(pen.id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Product with id {} not found", pen.id));

        let update = ProductUpdateDBRequest {
            price: Some(Decimal::from(2)),
            ..Default::default()
        };
        let err = service.update(pen.id, &update).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }
}
