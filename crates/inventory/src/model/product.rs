use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub stock: i64,
}

/// Largest stock a product may hold (2^53 - 1, exact in a JSON number).
pub const MAX_STOCK: i64 = 9_007_199_254_740_991;
