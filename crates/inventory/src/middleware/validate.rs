use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::{Validate, ValidationErrors};

/// JSON body that has already passed its `validator` rules.
/// Malformed JSON and rule violations both become a 400 `ErrorResponse`.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
            })?;

        json_value
            .validate()
            .map_err(|validation_errors| {
                HttpError::BadRequest(format_validation_errors(&validation_errors))
            })?;

        Ok(Self(json_value))
    }
}

/// Product id taken from the path; anything that is not an integer is a 400.
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::BadRequest("id must be an integer".to_string()))?;

        Ok(Self(id))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            error_messages.push(message);
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::product::{AdjustStockRequest, SetStockRequest};

    #[test]
    fn negative_stock_reports_the_range_message() {
        let err = SetStockRequest { stock: -1.0 }.validate().unwrap_err();
        assert_eq!(format_validation_errors(&err), "stock must be a number >= 0");
    }

    #[test]
    fn fractional_delta_reports_whole_number() {
        let err = AdjustStockRequest { delta: 1.5 }.validate().unwrap_err();
        assert_eq!(format_validation_errors(&err), "must be a whole number");
    }
}
