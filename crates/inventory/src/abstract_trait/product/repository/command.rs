use crate::repository::SeedProduct;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Inserts `catalog` in one transaction when the table is empty.
    /// Returns the number of inserted rows (0 when seeding was skipped).
    async fn seed_if_empty(&self, catalog: &[SeedProduct]) -> Result<u64, RepositoryError>;

    /// Overwrites the stock; `false` when no product has this id.
    async fn set_stock_by_id(&self, id: i64, stock: i64) -> Result<bool, RepositoryError>;

    /// Applies `delta` atomically and returns the new stock.
    async fn adjust_stock_by_id(&self, id: i64, delta: i64) -> Result<i64, RepositoryError>;
}
