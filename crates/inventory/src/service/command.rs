use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{AdjustStockRequest, SetStockRequest},
        response::product::StockResponse,
    },
    repository::SEED_PRODUCTS,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, OperationTracer},
};
use tracing::{error, info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct ProductCommandService {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
    pub tracer: OperationTracer,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            "product_command_service",
            "ProductCommandService",
            registry,
        );

        Self {
            query,
            command,
            tracer: OperationTracer::new("product-command-service", metrics),
        }
    }

    /// Id and sku never change, so the reduced view only needs the fresh stock.
    async fn stock_view(&self, id: i64, stock: i64) -> Result<StockResponse, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product not found".to_string()))?;

        Ok(StockResponse {
            id: product.id,
            sku: product.sku,
            stock,
        })
    }
}

fn validation_errors(err: validator::ValidationErrors) -> ServiceError {
    let messages = err
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string())
        })
        .collect();

    ServiceError::Validation(messages)
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn seed_if_empty(&self) -> Result<u64, ServiceError> {
        info!("🌱 Seeding product catalog if empty");

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "product_seed_if_empty",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "seed_if_empty"),
            ],
        );

        match self.command.seed_if_empty(&SEED_PRODUCTS).await {
            Ok(0) => {
                info!("📦 Catalog already populated, skipping seed");
                self.tracer.complete_success(&tracing_ctx, method, "Seed skipped");
                Ok(0)
            }
            Ok(inserted) => {
                info!("✅ Seeded {inserted} products");
                self.tracer.complete_success(&tracing_ctx, method, "Catalog seeded");
                Ok(inserted)
            }
            Err(e) => {
                error!("❌ Failed to seed catalog: {e:?}");
                self.tracer.complete_error(&tracing_ctx, method, "Failed to seed catalog");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn set_stock(
        &self,
        id: i64,
        req: &SetStockRequest,
    ) -> Result<StockResponse, ServiceError> {
        req.validate().map_err(validation_errors)?;
        let stock = req.stock();

        info!("✏️ Setting stock of product {id} to {stock}");

        let method = Method::Put;
        let tracing_ctx = self.tracer.start(
            "product_set_stock",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "set_stock"),
                KeyValue::new("product.id", id.to_string()),
                KeyValue::new("product.stock", stock),
            ],
        );

        let updated = match self.command.set_stock_by_id(id, stock).await {
            Ok(updated) => updated,
            Err(e) => {
                error!("❌ Failed to set stock of product {id}: {e:?}");
                self.tracer.complete_error(&tracing_ctx, method, "Failed to set stock");
                return Err(ServiceError::Repo(e));
            }
        };

        if !updated {
            warn!("⚠️ Cannot set stock, product {id} not found");
            self.tracer.complete_error(&tracing_ctx, method, "Product not found");
            return Err(ServiceError::NotFound("Product not found".to_string()));
        }

        match self.stock_view(id, stock).await {
            Ok(view) => {
                info!("✅ Stock of {} set to {stock}", view.sku);
                self.tracer.complete_success(&tracing_ctx, method, "Stock set");
                Ok(view)
            }
            Err(e) => {
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to read product after update");
                Err(e)
            }
        }
    }

    async fn adjust_stock(
        &self,
        id: i64,
        req: &AdjustStockRequest,
    ) -> Result<StockResponse, ServiceError> {
        req.validate().map_err(validation_errors)?;
        let delta = req.delta();

        info!("🔧 Adjusting stock of product {id} by {delta}");

        let method = Method::Patch;
        let tracing_ctx = self.tracer.start(
            "product_adjust_stock",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "adjust_stock"),
                KeyValue::new("product.id", id.to_string()),
                KeyValue::new("stock.delta", delta),
            ],
        );

        let stock = match self.command.adjust_stock_by_id(id, delta).await {
            Ok(stock) => stock,
            Err(
                e @ (RepositoryError::InsufficientStock { .. }
                | RepositoryError::StockLimitExceeded { .. }),
            ) => {
                warn!("⚠️ Rejected stock adjustment for product {id}: {e}");
                self.tracer.complete_error(&tracing_ctx, method, &e.to_string());
                return Err(ServiceError::Repo(e));
            }
            Err(RepositoryError::NotFound) => {
                warn!("⚠️ Cannot adjust stock, product {id} not found");
                self.tracer.complete_error(&tracing_ctx, method, "Product not found");
                return Err(ServiceError::NotFound("Product not found".to_string()));
            }
            Err(e) => {
                error!("❌ Failed to adjust stock of product {id}: {e:?}");
                self.tracer.complete_error(&tracing_ctx, method, "Failed to adjust stock");
                return Err(ServiceError::Repo(e));
            }
        };

        match self.stock_view(id, stock).await {
            Ok(view) => {
                info!("✅ Stock of {} is now {stock}", view.sku);
                self.tracer.complete_success(&tracing_ctx, method, "Stock adjusted");
                Ok(view)
            }
            Err(e) => {
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to read product after update");
                Err(e)
            }
        }
    }
}
