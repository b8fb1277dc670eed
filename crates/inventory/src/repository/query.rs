use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products");

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, sku, name, stock
            FROM products
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, sku, name, stock
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(result)
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🏷️ Fetching product by SKU: {}", sku);

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, sku, name, stock
            FROM products
            WHERE sku = ?
            "#,
        )
        .bind(sku)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product by SKU {}: {:?}", sku, e);
            RepositoryError::from(e)
        })?;

        Ok(result)
    }
}
