use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    repository::ProductRepository,
    service::ProductService,
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::fmt;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let repository = ProductRepository::new(pool);
        let ProductService { query, command } = ProductService::new(repository, registry);

        Self {
            product_query: query,
            product_command: command,
        }
    }
}
