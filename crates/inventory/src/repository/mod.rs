mod command;
mod query;
mod seed;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;
pub use self::seed::{SEED_PRODUCTS, SeedProduct};

use crate::abstract_trait::product::repository::{
    DynProductCommandRepository, DynProductQueryRepository,
};
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;

        let command =
            Arc::new(ProductCommandRepository::new(pool.clone())) as DynProductCommandRepository;

        Self { query, command }
    }
}

/// Creates the products table if it does not exist yet.
pub async fn run_migrations(pool: &ConnectionPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::MAX_STOCK;
    use shared::{config::ConnectionManager, errors::RepositoryError};

    async fn seeded_repository() -> ProductRepository {
        let pool = ConnectionManager::in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();

        let repo = ProductRepository::new(pool);
        repo.command.seed_if_empty(&SEED_PRODUCTS).await.unwrap();
        repo
    }

    async fn sku_id(repo: &ProductRepository, sku: &str) -> i64 {
        repo.query.find_by_sku(sku).await.unwrap().unwrap().id
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let repo = seeded_repository().await;

        let second = repo.command.seed_if_empty(&SEED_PRODUCTS).await.unwrap();
        assert_eq!(second, 0);

        let products = repo.query.find_all().await.unwrap();
        assert_eq!(products.len(), SEED_PRODUCTS.len());

        let mut skus: Vec<_> = products.iter().map(|p| p.sku.clone()).collect();
        skus.sort();
        skus.dedup();
        assert_eq!(skus.len(), SEED_PRODUCTS.len());
    }

    #[tokio::test]
    async fn seed_rolls_back_on_duplicate_sku() {
        let pool = ConnectionManager::in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = ProductRepository::new(pool);

        let duplicated = [SEED_PRODUCTS[0], SEED_PRODUCTS[1], SEED_PRODUCTS[0]];
        let err = repo.command.seed_if_empty(&duplicated).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));

        assert!(repo.query.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_products_in_id_order() {
        let repo = seeded_repository().await;

        let products = repo.query.find_all().await.unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(products[0].sku, "CASE-IPHN");
    }

    #[tokio::test]
    async fn finds_by_sku_and_id() {
        let repo = seeded_repository().await;

        let pink = repo.query.find_by_sku("IPHN-15-PNK").await.unwrap().unwrap();
        assert_eq!(pink.stock, 7);

        let same = repo.query.find_by_id(pink.id).await.unwrap().unwrap();
        assert_eq!(same, pink);

        assert!(repo.query.find_by_sku("iphn-15-pnk").await.unwrap().is_none());
        assert!(repo.query.find_by_id(999_999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_stock_round_trips_and_is_idempotent() {
        let repo = seeded_repository().await;
        let id = sku_id(&repo, "APWT-S9").await;

        assert!(repo.command.set_stock_by_id(id, 42).await.unwrap());
        assert!(repo.command.set_stock_by_id(id, 42).await.unwrap());

        let product = repo.query.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.stock, 42);

        assert!(!repo.command.set_stock_by_id(999_999, 1).await.unwrap());
    }

    #[tokio::test]
    async fn adjust_applies_delta_when_result_is_non_negative() {
        let repo = seeded_repository().await;
        let id = sku_id(&repo, "IPHN-15-PNK").await;

        assert_eq!(repo.command.adjust_stock_by_id(id, 3).await.unwrap(), 10);
        assert_eq!(repo.command.adjust_stock_by_id(id, -10).await.unwrap(), 0);
        assert_eq!(repo.command.adjust_stock_by_id(id, 0).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn adjust_rejects_negative_result_without_mutating() {
        let repo = seeded_repository().await;
        let id = sku_id(&repo, "IPHN-15-PNK").await;

        let err = repo.command.adjust_stock_by_id(id, -100).await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::InsufficientStock {
                available: 7,
                requested: -100
            }
        ));

        let product = repo.query.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.stock, 7);
    }

    #[tokio::test]
    async fn adjust_reports_missing_product() {
        let repo = seeded_repository().await;

        let err = repo.command.adjust_stock_by_id(999_999, 1).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn schema_refuses_negative_stock() {
        let repo = seeded_repository().await;
        let id = sku_id(&repo, "MGSF-15W").await;

        assert!(repo.command.set_stock_by_id(id, -1).await.is_err());
        let product = repo.query.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.stock, 30);
    }

    #[tokio::test]
    async fn adjust_never_grows_stock_past_the_limit() {
        let repo = seeded_repository().await;
        let id = sku_id(&repo, "IPHN-15-PNK").await;
        assert!(repo.command.set_stock_by_id(id, MAX_STOCK).await.unwrap());

        for _ in 0..3 {
            let err = repo.command.adjust_stock_by_id(id, MAX_STOCK).await.unwrap_err();
            assert!(matches!(
                err,
                RepositoryError::StockLimitExceeded {
                    available: MAX_STOCK,
                    requested: MAX_STOCK
                }
            ));
        }

        let product = repo.query.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.stock, MAX_STOCK);
        assert_eq!(repo.command.adjust_stock_by_id(id, -1).await.unwrap(), MAX_STOCK - 1);
    }

    #[tokio::test]
    async fn schema_refuses_stock_above_the_limit() {
        let repo = seeded_repository().await;
        let id = sku_id(&repo, "MGSF-15W").await;

        assert!(repo.command.set_stock_by_id(id, MAX_STOCK + 1).await.is_err());
        let product = repo.query.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.stock, 30);
    }

    #[tokio::test]
    async fn seed_keeps_the_catalog_names() {
        let repo = seeded_repository().await;

        let names: Vec<String> = repo
            .query
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(
            names,
            [
                "Capinha para iPhone",
                "iPhone 15 Preto 128GB",
                "iPhone 15 Rosa 128GB",
                "AirPods (3ª geração)",
                "Apple Watch Series 9",
                "Carregador MagSafe 15W",
            ]
        );
    }
}
