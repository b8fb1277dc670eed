use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Insufficient stock: available {available}, requested change {requested}")]
    InsufficientStock { available: i64, requested: i64 },

    #[error("Stock limit exceeded: available {available}, requested change {requested}")]
    StockLimitExceeded { available: i64, requested: i64 },

    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

impl RepositoryError {
    /// Maps unique-constraint failures to `AlreadyExists`, leaving every other
    /// database error untouched.
    pub fn from_constraint(err: SqlxError, what: &str) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists(format!("{what}: {}", db_err.message()))
            }
            _ => RepositoryError::Sqlx(err),
        }
    }
}
