use crate::errors::internal::{CatalogError, CredentialError, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Trail catalog error types
#[derive(ApiResponse, Debug)]
pub enum TrailError {
    /// Required field missing or empty
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Missing, invalid or expired token, or caller does not own the comment
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Trail does not exist
    #[oai(status = 404)]
    TrailNotFound(Json<ErrorResponse>),

    /// Comment does not exist on the trail
    #[oai(status = 404)]
    CommentNotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl TrailError {
    /// Create a TrailNotFound error
    pub fn trail_not_found() -> Self {
        TrailError::TrailNotFound(Json(ErrorResponse::new(
            "trail_not_found",
            "Trail not found",
            404,
        )))
    }

    /// Create a CommentNotFound error
    pub fn comment_not_found() -> Self {
        TrailError::CommentNotFound(Json(ErrorResponse::new(
            "comment_not_found",
            "Comment not found",
            404,
        )))
    }

    /// Create an Unauthorized error
    pub fn unauthorized(error: &str, message: &str) -> Self {
        TrailError::Unauthorized(Json(ErrorResponse::new(error, message, 401)))
    }

    /// Convert InternalError to TrailError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Validation(validation) => {
                tracing::debug!("Rejected trail input: {}", validation);
                TrailError::ValidationFailed(Json(ErrorResponse::validation(
                    &validation.violations,
                )))
            }
            InternalError::Catalog(CatalogError::TrailNotFound { trail_id }) => {
                tracing::debug!("Trail not found: {}", trail_id);
                Self::trail_not_found()
            }
            InternalError::Catalog(CatalogError::CommentNotFound { comment_id }) => {
                tracing::debug!("Comment not found: {}", comment_id);
                Self::comment_not_found()
            }
            InternalError::Catalog(CatalogError::NotCommentAuthor { comment_id, user_id }) => {
                tracing::warn!("User {} tried to delete comment {}", user_id, comment_id);
                Self::unauthorized("not_authorized", "User not authorized")
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
                tracing::error!("Unexpected error in trail operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    fn internal_server_error() -> Self {
        TrailError::InternalError(Json(ErrorResponse::new(
            "internal_error",
            "An internal error occurred",
            500,
        )))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            TrailError::ValidationFailed(json)
            | TrailError::Unauthorized(json)
            | TrailError::TrailNotFound(json)
            | TrailError::CommentNotFound(json)
            | TrailError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
