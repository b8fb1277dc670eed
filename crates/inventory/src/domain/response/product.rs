use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ProductResponse {
    #[schema(example = 3)]
    pub id: i64,
    #[schema(example = "IPHN-15-PNK")]
    pub sku: String,
    #[schema(example = "iPhone 15 Rosa 128GB")]
    pub name: String,
    #[schema(example = 7)]
    pub stock: i64,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            sku: value.sku,
            name: value.name,
            stock: value.stock,
        }
    }
}

/// Reduced view returned by the stock endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct StockResponse {
    #[schema(example = 3)]
    pub id: i64,
    #[schema(example = "IPHN-15-PNK")]
    pub sku: String,
    #[schema(example = 7)]
    pub stock: i64,
}

impl From<ProductModel> for StockResponse {
    fn from(value: ProductModel) -> Self {
        StockResponse {
            id: value.id,
            sku: value.sku,
            stock: value.stock,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthResponse {
    #[schema(example = true)]
    pub ok: bool,
}
