use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl DomainError {
    /// Stable, client-safe code for this error.
    ///
    /// Internal details (SQL messages, hashing failures) stay in the logs;
    /// HTTP responses only ever carry this code.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "not_found",
            DomainError::Validation(_) => "validation_error",
            DomainError::Conflict(_) => "conflict",
            DomainError::Database(_) => "database_error",
            DomainError::Crypto(_) => "crypto_error",
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
