use crate::errors::internal::{CatalogError, CredentialError, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Account and trail-list error types
#[derive(ApiResponse, Debug)]
pub enum UserError {
    /// Required field missing or invalid
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Email already registered
    #[oai(status = 400)]
    DuplicateEmail(Json<ErrorResponse>),

    /// Trail already in the list, or not in it for a removal
    #[oai(status = 400)]
    ListConflict(Json<ErrorResponse>),

    /// Missing, invalid or expired token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Referenced trail does not exist
    #[oai(status = 404)]
    TrailNotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UserError {
    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        UserError::DuplicateEmail(Json(ErrorResponse::new(
            "duplicate_email",
            "User already exists",
            400,
        )))
    }

    /// Create a TrailNotFound error
    pub fn trail_not_found() -> Self {
        UserError::TrailNotFound(Json(ErrorResponse::new(
            "trail_not_found",
            "Trail not found",
            404,
        )))
    }

    /// Create an Unauthorized error
    pub fn unauthorized(error: &str, message: &str) -> Self {
        UserError::Unauthorized(Json(ErrorResponse::new(error, message, 401)))
    }

    /// Convert InternalError to UserError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Validation(validation) => {
                tracing::debug!("Rejected user input: {}", validation);
                UserError::ValidationFailed(Json(ErrorResponse::validation(
                    &validation.violations,
                )))
            }
            InternalError::Credential(CredentialError::DuplicateEmail { email }) => {
                tracing::warn!("Duplicate email registration attempt: {}", email);
                Self::duplicate_email()
            }
            InternalError::Profile(profile) => {
                tracing::debug!("Trail list conflict: {}", profile);
                UserError::ListConflict(Json(ErrorResponse::new(
                    "list_conflict",
                    profile.public_message(),
                    400,
                )))
            }
            InternalError::Catalog(CatalogError::TrailNotFound { trail_id }) => {
                tracing::debug!("Trail not found: {}", trail_id);
                Self::trail_not_found()
            }
            InternalError::Credential(CredentialError::ExpiredToken) => {
                Self::unauthorized("expired_token", "Token has expired")
            }
            InternalError::Credential(CredentialError::InvalidToken { reason }) => {
                tracing::debug!("Invalid token: {}", reason);
                Self::unauthorized("invalid_token", "Token is not valid")
            }
            InternalError::Credential(CredentialError::UserIdNotFound { user_id }) => {
                tracing::debug!("Token subject {} no longer exists", user_id);
                Self::unauthorized("invalid_token", "Token is not valid")
            }
            _ => {
                tracing::error!("Unexpected error in user operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    fn internal_server_error() -> Self {
        UserError::InternalError(Json(ErrorResponse::new(
            "internal_error",
            "An internal error occurred",
            500,
        )))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            UserError::ValidationFailed(json)
            | UserError::DuplicateEmail(json)
            | UserError::ListConflict(json)
            | UserError::Unauthorized(json)
            | UserError::TrailNotFound(json)
            | UserError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
