use crate::domain::{
    requests::product::{AdjustStockRequest, SetStockRequest},
    response::product::StockResponse,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn seed_if_empty(&self) -> Result<u64, ServiceError>;
    async fn set_stock(
        &self,
        id: i64,
        req: &SetStockRequest,
    ) -> Result<StockResponse, ServiceError>;
    async fn adjust_stock(
        &self,
        id: i64,
        req: &AdjustStockRequest,
    ) -> Result<StockResponse, ServiceError>;
}
