use inventory::{
    domain::requests::product::{AdjustStockRequest, SetStockRequest, StockLookup},
    state::AppState,
};
use shared::config::ConnectionManager;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_decrements_never_oversell() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("inventory.sqlite").display());

    let pool = ConnectionManager::new_pool(&url, 5).await.unwrap();
    let state = AppState::build(pool).await.unwrap();
    let query = state.di_container.product_query.clone();
    let command = state.di_container.product_command.clone();

    let id = query
        .find_stock(&StockLookup::Sku("IPHN-15-PNK".into()))
        .await
        .unwrap()
        .id;
    command
        .set_stock(id, &SetStockRequest { stock: 50.0 })
        .await
        .unwrap();

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let command = command.clone();
            tokio::spawn(async move {
                command
                    .adjust_stock(id, &AdjustStockRequest { delta: -1.0 })
                    .await
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(query.find_by_id(id).await.unwrap().stock, 0);

    let err = command
        .adjust_stock(id, &AdjustStockRequest { delta: -1.0 })
        .await;
    assert!(err.is_err());
    assert_eq!(query.find_by_id(id).await.unwrap().stock, 0);
}
