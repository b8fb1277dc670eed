use crate::domain::response::product::HealthResponse;
use axum::{Json, response::IntoResponse, routing::get};
use utoipa_axum::router::OpenApiRouter;

const INDEX_TEXT: &str = "Inventory stock API, available endpoints:

GET   /api/health
GET   /api/products
GET   /api/products/{id}
GET   /api/stock?sku=IPHN-15-PNK
PUT   /api/products/{id}/stock   { \"stock\": 10 }
PATCH /api/products/{id}/stock   { \"delta\": -1 }

GET   /metrics
GET   /swagger-ui";

pub async fn index() -> &'static str {
    INDEX_TEXT
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { ok: true })
}

pub fn health_routes() -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
}
