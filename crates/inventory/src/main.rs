use anyhow::{Context, Result};
use inventory::{config::myconfig::Config, handler::AppRouter, state::AppState};
use shared::{
    config::ConnectionManager,
    utils::{Telemetry, init_logger},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = match config.otel_endpoint.as_deref() {
        Some(endpoint) => Some(
            Telemetry::init("inventory-service", endpoint)
                .context("Failed to initialize telemetry")?,
        ),
        None => None,
    };

    let _log_guard = init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        "inventory-service",
        config.is_dev,
        config.is_enable_file_log,
    );

    info!("🚀 Starting Inventory Service initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool.clone())
        .await
        .context("Failed to create AppState")?;

    info!("✅ Application setup completed successfully.");

    let result = AppRouter::serve(config.port, state).await;

    info!("🛑 Shutting down Inventory Service...");

    db_pool.close().await;

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {e}");
        }
    }

    info!("✅ Inventory Service shutdown complete.");

    result
}
