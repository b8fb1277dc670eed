use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

fn validate_whole_number(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value.fract() == 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("whole_number").with_message("must be a whole number".into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetStockRequest {
    #[validate(
        range(min = 0.0, max = 9_007_199_254_740_991.0, message = "stock must be a number >= 0"),
        custom(function = "validate_whole_number")
    )]
    #[schema(example = 10)]
    pub stock: f64,
}

impl SetStockRequest {
    pub fn stock(&self) -> i64 {
        self.stock as i64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdjustStockRequest {
    #[validate(
        range(
            min = -9_007_199_254_740_991.0,
            max = 9_007_199_254_740_991.0,
            message = "delta must be a number"
        ),
        custom(function = "validate_whole_number")
    )]
    #[schema(example = -1)]
    pub delta: f64,
}

impl AdjustStockRequest {
    pub fn delta(&self) -> i64 {
        self.delta as i64
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StockQuery {
    /// Product SKU, takes precedence over `id`.
    #[param(example = "IPHN-15-PNK")]
    pub sku: Option<String>,
    /// Product id.
    #[param(example = "3")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockLookup {
    Sku(String),
    Id(i64),
}

impl TryFrom<StockQuery> for StockLookup {
    type Error = ServiceError;

    fn try_from(query: StockQuery) -> Result<Self, Self::Error> {
        let sku = query.sku.filter(|s| !s.is_empty());
        let id = query.id.filter(|s| !s.is_empty());

        match (sku, id) {
            (Some(sku), _) => Ok(StockLookup::Sku(sku)),
            (None, Some(id)) => id
                .trim()
                .parse::<i64>()
                .map(StockLookup::Id)
                .map_err(|_| ServiceError::Validation(vec!["id must be an integer".into()])),
            (None, None) => Err(ServiceError::Validation(vec![
                "Provide either sku or id".into(),
            ])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_stock_rejects_negative_and_fractional_values() {
        assert!(SetStockRequest { stock: 0.0 }.validate().is_ok());
        assert!(SetStockRequest { stock: 42.0 }.validate().is_ok());
        assert!(SetStockRequest { stock: -1.0 }.validate().is_err());
        assert!(SetStockRequest { stock: 2.5 }.validate().is_err());
        assert!(SetStockRequest { stock: 1e300 }.validate().is_err());
    }

    #[test]
    fn adjust_stock_accepts_negative_whole_deltas() {
        assert!(AdjustStockRequest { delta: -100.0 }.validate().is_ok());
        assert!(AdjustStockRequest { delta: 3.0 }.validate().is_ok());
        assert!(AdjustStockRequest { delta: 0.5 }.validate().is_err());
        assert_eq!(AdjustStockRequest { delta: -7.0 }.delta(), -7);
    }

    #[test]
    fn stock_lookup_prefers_sku_and_ignores_empty_values() {
        let both = StockQuery {
            sku: Some("APWT-S9".into()),
            id: Some("1".into()),
        };
        assert_eq!(
            StockLookup::try_from(both).unwrap(),
            StockLookup::Sku("APWT-S9".into())
        );

        let empty_sku = StockQuery {
            sku: Some(String::new()),
            id: Some("4".into()),
        };
        assert_eq!(StockLookup::try_from(empty_sku).unwrap(), StockLookup::Id(4));
    }

    #[test]
    fn stock_lookup_requires_a_usable_key() {
        assert!(matches!(
            StockLookup::try_from(StockQuery::default()),
            Err(ServiceError::Validation(_))
        ));

        let bad_id = StockQuery {
            sku: None,
            id: Some("abc".into()),
        };
        assert!(matches!(
            StockLookup::try_from(bad_id),
            Err(ServiceError::Validation(_))
        ));
    }
}
