mod command;
mod query;

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;

use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    repository::ProductRepository,
};
use prometheus_client::registry::Registry;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductService {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

impl ProductService {
    pub fn new(repo: ProductRepository, registry: &mut Registry) -> Self {
        let query = Arc::new(ProductQueryService::new(repo.query.clone(), registry))
            as DynProductQueryService;

        let command = Arc::new(ProductCommandService::new(
            repo.query.clone(),
            repo.command.clone(),
            registry,
        )) as DynProductCommandService;

        Self { query, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::requests::product::{AdjustStockRequest, SetStockRequest, StockLookup},
        repository::run_migrations,
    };
    use shared::{
        config::ConnectionManager,
        errors::{RepositoryError, ServiceError},
    };

    async fn seeded_service() -> ProductService {
        let pool = ConnectionManager::in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();

        let mut registry = Registry::default();
        let service = ProductService::new(ProductRepository::new(pool), &mut registry);
        assert_eq!(service.command.seed_if_empty().await.unwrap(), 6);
        service
    }

    async fn pink_id(service: &ProductService) -> i64 {
        service
            .query
            .find_stock(&StockLookup::Sku("IPHN-15-PNK".into()))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn second_seed_is_skipped() {
        let service = seeded_service().await;
        assert_eq!(service.command.seed_if_empty().await.unwrap(), 0);
        assert_eq!(service.query.find_all().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn stock_lookup_by_sku_and_id_agree() {
        let service = seeded_service().await;
        let id = pink_id(&service).await;

        let by_sku = service
            .query
            .find_stock(&StockLookup::Sku("IPHN-15-PNK".into()))
            .await
            .unwrap();
        let by_id = service.query.find_stock(&StockLookup::Id(id)).await.unwrap();

        assert_eq!(by_sku, by_id);
        assert_eq!(by_sku.stock, 7);
    }

    #[tokio::test]
    async fn unknown_sku_is_not_found() {
        let service = seeded_service().await;
        let err = service
            .query
            .find_stock(&StockLookup::Sku("NOPE".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn set_stock_returns_reduced_view() {
        let service = seeded_service().await;
        let id = pink_id(&service).await;

        let view = service
            .command
            .set_stock(id, &SetStockRequest { stock: 42.0 })
            .await
            .unwrap();

        assert_eq!(view.sku, "IPHN-15-PNK");
        assert_eq!(view.stock, 42);
        assert_eq!(service.query.find_by_id(id).await.unwrap().stock, 42);
    }

    #[tokio::test]
    async fn set_stock_on_missing_product_is_not_found() {
        let service = seeded_service().await;
        let err = service
            .command
            .set_stock(999_999, &SetStockRequest { stock: 1.0 })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn fractional_stock_is_rejected_before_touching_the_row() {
        let service = seeded_service().await;
        let id = pink_id(&service).await;

        let err = service
            .command
            .set_stock(id, &SetStockRequest { stock: 2.5 })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(service.query.find_by_id(id).await.unwrap().stock, 7);
    }

    #[tokio::test]
    async fn adjust_below_zero_keeps_stock() {
        let service = seeded_service().await;
        let id = pink_id(&service).await;

        let err = service
            .command
            .adjust_stock(id, &AdjustStockRequest { delta: -100.0 })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::InsufficientStock {
                available: 7,
                requested: -100
            })
        ));
        assert_eq!(service.query.find_by_id(id).await.unwrap().stock, 7);
    }

    #[tokio::test]
    async fn adjust_applies_delta() {
        let service = seeded_service().await;
        let id = pink_id(&service).await;

        let view = service
            .command
            .adjust_stock(id, &AdjustStockRequest { delta: -7.0 })
            .await
            .unwrap();
        assert_eq!(view.stock, 0);

        let view = service
            .command
            .adjust_stock(id, &AdjustStockRequest { delta: 3.0 })
            .await
            .unwrap();
        assert_eq!(view.stock, 3);
    }
}
