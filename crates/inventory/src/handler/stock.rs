use crate::{
    abstract_trait::product::service::DynProductQueryService,
    domain::{
        requests::product::{StockLookup, StockQuery},
        response::product::StockResponse,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/stock",
    tag = "Stock",
    params(StockQuery),
    responses(
        (status = 200, description = "Stock of the matching product", body = StockResponse),
        (status = 400, description = "Neither sku nor id given, or id is not an integer", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_stock(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<StockQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let lookup = StockLookup::try_from(params)?;
    let response = service.find_stock(&lookup).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn stock_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/stock", get(get_stock))
        .layer(Extension(app_state.di_container.product_query.clone()))
}
