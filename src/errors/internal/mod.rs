use thiserror::Error;

pub mod catalog;
pub mod credential;
pub mod database;
pub mod profile;
pub mod validation;

pub use catalog::CatalogError;
pub use credential::CredentialError;
pub use database::DatabaseError;
pub use profile::ProfileError;
pub use validation::{FieldViolation, ValidationError};

/// Internal error type for store, provider and coordinator operations
///
/// Hybrid design separates infrastructure errors (shared) from domain errors.
/// Not exposed via API - endpoints must convert to AuthError, UserError or TrailError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    /// Create a parse error with context
    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    /// Create a crypto error with context
    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
