use crate::domain::{
    requests::product::StockLookup,
    response::product::{ProductResponse, StockResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError>;
    async fn find_stock(&self, lookup: &StockLookup) -> Result<StockResponse, ServiceError>;
}
