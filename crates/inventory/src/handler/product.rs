use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{AdjustStockRequest, SetStockRequest},
        response::product::{ProductResponse, StockResponse},
    },
    middleware::validate::{ProductId, SimpleValidatedJson},
    state::AppState,
};
use askama::Template;
use axum::{
    Json,
    extract::Extension,
    http::{HeaderMap, StatusCode, header::ACCEPT},
    response::{Html, IntoResponse, Response},
    routing::{get, put},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

#[derive(Template)]
#[template(path = "products.html")]
struct ProductListTemplate<'a> {
    products: &'a [ProductResponse],
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "All products ordered by id; an HTML table when Accept contains text/html", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let products = service.find_all().await?;

    if !wants_html(&headers) {
        return Ok((StatusCode::OK, Json(products)).into_response());
    }

    let page = ProductListTemplate {
        products: &products,
    }
    .render()
    .map_err(|e| {
        error!("❌ Failed to render product list: {e}");
        HttpError::Internal(format!("Failed to render product list: {e}"))
    })?;

    Ok(Html(page).into_response())
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}/stock",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = SetStockRequest,
    responses(
        (status = 200, description = "Stock overwritten", body = StockResponse),
        (status = 400, description = "Stock is not a whole number >= 0", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn set_product_stock(
    Extension(service): Extension<DynProductCommandService>,
    ProductId(id): ProductId,
    SimpleValidatedJson(body): SimpleValidatedJson<SetStockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.set_stock(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}/stock",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = AdjustStockRequest,
    responses(
        (status = 200, description = "Stock adjusted", body = StockResponse),
        (status = 400, description = "Delta is not a whole number, or stock would go negative", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn adjust_product_stock(
    Extension(service): Extension<DynProductCommandService>,
    ProductId(id): ProductId,
    SimpleValidatedJson(body): SimpleValidatedJson<AdjustStockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.adjust_stock(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .route(
            "/api/products/{id}/stock",
            put(set_product_stock).patch(adjust_product_stock),
        )
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
