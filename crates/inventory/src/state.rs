use crate::{di::DependenciesInject, repository::run_migrations};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    /// Migrates and seeds the database and spawns the system metrics sampler.
    pub async fn new(pool: ConnectionPool) -> Result<Self> {
        let state = Self::build(pool).await?;

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        Ok(state)
    }

    /// Same as [`AppState::new`] without the background system metrics sampler.
    pub async fn build(pool: ConnectionPool) -> Result<Self> {
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        let di_container = DependenciesInject::new(pool, &mut registry);

        let inserted = di_container
            .product_command
            .seed_if_empty()
            .await
            .context("Failed to seed product catalog")?;

        if inserted > 0 {
            info!("🌱 Seeded {inserted} products into an empty catalog");
        }

        registry.register_metrics(&system_metrics);

        Ok(Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
        })
    }
}

trait MetricsRegister {
    fn register_metrics(&mut self, metrics: &SystemMetrics);
}

impl MetricsRegister for Registry {
    fn register_metrics(&mut self, metrics: &SystemMetrics) {
        metrics.register(self);
    }
}
