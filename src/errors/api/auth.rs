use crate::errors::internal::{CredentialError, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Required field missing or invalid
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Invalid email or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Invalid or malformed JWT, or unknown token subject
    #[oai(status = 401)]
    InvalidToken(Json<ErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse::new(
            "invalid_credentials",
            "Invalid credentials",
            401,
        )))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(Json(ErrorResponse::new(
            "invalid_token",
            "Token is not valid",
            401,
        )))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(Json(ErrorResponse::new(
            "expired_token",
            "Token has expired",
            401,
        )))
    }

    /// Convert InternalError to AuthError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Validation(validation) => {
                tracing::debug!("Rejected auth input: {}", validation);
                AuthError::ValidationFailed(Json(ErrorResponse::validation(
                    &validation.violations,
                )))
            }
            InternalError::Credential(CredentialError::InvalidCredentials) => {
                tracing::debug!("Invalid credentials attempt");
                Self::invalid_credentials()
            }
            InternalError::Credential(CredentialError::InvalidToken { reason }) => {
                tracing::debug!("Invalid token: {}", reason);
                Self::invalid_token()
            }
            InternalError::Credential(CredentialError::UserIdNotFound { user_id }) => {
                tracing::debug!("Token subject {} no longer exists", user_id);
                Self::invalid_token()
            }
            InternalError::Credential(CredentialError::ExpiredToken) => {
                tracing::debug!("Expired token");
                Self::expired_token()
            }
            _ => {
                tracing::error!("Unexpected error in auth operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    fn internal_server_error() -> Self {
        AuthError::InternalError(Json(ErrorResponse::new(
            "internal_error",
            "An internal error occurred",
            500,
        )))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::ValidationFailed(json)
            | AuthError::InvalidCredentials(json)
            | AuthError::InvalidToken(json)
            | AuthError::ExpiredToken(json)
            | AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
