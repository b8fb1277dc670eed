use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::StockLookup,
        response::product::{ProductResponse, StockResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub tracer: OperationTracer,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", "ProductQueryService", registry);

        Self {
            query,
            tracer: OperationTracer::new("product-query-service", metrics),
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Finding all products");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "product_find_all",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let products = match self.query.find_all().await {
            Ok(products) => {
                self.tracer.complete_success(&tracing_ctx, method, "Products retrieved from DB");
                products
            }
            Err(e) => {
                let msg = format!("❌ Failed to fetch all products: {e:?}");
                error!("{msg}");
                self.tracer.complete_error(&tracing_ctx, method, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Found {} products", products.len());

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "product_find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                info!("✅ Found product '{}' (ID: {id})", product.name);
                self.tracer.complete_success(&tracing_ctx, method, "Product retrieved from DB");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                error!("❌ Product not found with ID: {id}");
                self.tracer.complete_error(&tracing_ctx, method, "Product not found");
                Err(ServiceError::NotFound("Product not found".to_string()))
            }
            Err(e) => {
                error!("❌ Database error while finding product ID {id}: {e:?}");
                self.tracer.complete_error(&tracing_ctx, method, "Database error");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_stock(&self, lookup: &StockLookup) -> Result<StockResponse, ServiceError> {
        info!("📦 Finding stock by {lookup:?}");

        let method = Method::Get;
        let key = match lookup {
            StockLookup::Sku(sku) => KeyValue::new("product.sku", sku.clone()),
            StockLookup::Id(id) => KeyValue::new("product.id", id.to_string()),
        };
        let tracing_ctx = self.tracer.start(
            "product_find_stock",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_stock"),
                key,
            ],
        );

        let result = match lookup {
            StockLookup::Sku(sku) => self.query.find_by_sku(sku).await,
            StockLookup::Id(id) => self.query.find_by_id(*id).await,
        };

        match result {
            Ok(Some(product)) => {
                self.tracer.complete_success(&tracing_ctx, method, "Stock retrieved from DB");
                Ok(StockResponse::from(product))
            }
            Ok(None) => {
                error!("❌ No product matches {lookup:?}");
                self.tracer.complete_error(&tracing_ctx, method, "Product not found");
                Err(ServiceError::NotFound("Product not found".to_string()))
            }
            Err(e) => {
                error!("❌ Database error while finding stock for {lookup:?}: {e:?}");
                self.tracer.complete_error(&tracing_ctx, method, "Database error");
                Err(ServiceError::Repo(e))
            }
        }
    }
}
