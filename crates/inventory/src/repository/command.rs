use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    model::product::MAX_STOCK,
    repository::seed::SeedProduct,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn seed_if_empty(&self, catalog: &[SeedProduct]) -> Result<u64, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM products")
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        if count > 0 {
            info!("🌱 Products table already holds {count} rows, skipping seed");
            tx.rollback().await.map_err(RepositoryError::from)?;
            return Ok(0);
        }

        for product in catalog {
            sqlx::query(
                r#"
                INSERT INTO products (sku, name, stock)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(product.sku)
            .bind(product.name)
            .bind(product.stock)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to seed product {}: {:?}", product.sku, err);
                RepositoryError::from_constraint(err, product.sku)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🌱 Seeded {} products", catalog.len());
        Ok(catalog.len() as u64)
    }

    async fn set_stock_by_id(&self, id: i64, stock: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock = ?
            WHERE id = ?
            "#,
        )
        .bind(stock)
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to set stock for product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!("✅ Set stock of product ID {} to {}", id, stock);
        } else {
            warn!("⚠️ No product with ID {} to set stock on", id);
        }

        Ok(updated)
    }

    async fn adjust_stock_by_id(&self, id: i64, delta: i64) -> Result<i64, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // The guarded UPDATE runs first so the write lock is held before any read.
        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE products
            SET stock = stock + ?1
            WHERE id = ?2 AND stock + ?1 BETWEEN 0 AND ?3
            RETURNING stock
            "#,
        )
        .bind(delta)
        .bind(id)
        .bind(MAX_STOCK)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to adjust stock of product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if let Some(stock) = updated {
            tx.commit().await.map_err(RepositoryError::from)?;
            info!(
                "✅ Adjusted stock of product ID {} by {} (new stock: {})",
                id, delta, stock
            );
            return Ok(stock);
        }

        let current: Option<i64> = sqlx::query_scalar("SELECT stock FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.rollback().await.map_err(RepositoryError::from)?;

        match current {
            None => {
                warn!("⚠️ No product with ID {} to adjust", id);
                Err(RepositoryError::NotFound)
            }
            Some(available) if available.saturating_add(delta) > MAX_STOCK => {
                warn!(
                    "⚠️ Stock limit exceeded for product ID {}: available {}, delta {}",
                    id, available, delta
                );
                Err(RepositoryError::StockLimitExceeded {
                    available,
                    requested: delta,
                })
            }
            Some(available) => {
                warn!(
                    "⚠️ Insufficient stock for product ID {}: available {}, delta {}",
                    id, available, delta
                );
                Err(RepositoryError::InsufficientStock {
                    available,
                    requested: delta,
                })
            }
        }
    }
}
