use crate::types::dto::common::ErrorResponse;
use poem_openapi::error::{AuthorizationError, ParseRequestPayloadError};
use poem_openapi::{ApiResponse, payload::Json};

/// Requests rejected by the framework before reaching a handler
#[derive(ApiResponse, Debug)]
pub enum RequestError {
    /// Body is not valid JSON for the endpoint
    #[oai(status = 400)]
    MalformedBody(Json<ErrorResponse>),

    /// Missing or non-bearer Authorization header
    #[oai(status = 401)]
    MissingToken(Json<ErrorResponse>),
}

impl RequestError {
    pub fn from_authorization_error(_: AuthorizationError) -> Self {
        tracing::debug!("Request without a bearer token");
        RequestError::MissingToken(Json(ErrorResponse::new(
            "invalid_token",
            "No token, authorization denied",
            401,
        )))
    }

    pub fn from_payload_error(err: ParseRequestPayloadError) -> Self {
        tracing::debug!("Rejected request body: {}", err.reason);
        RequestError::MalformedBody(Json(ErrorResponse::new(
            "validation_failed",
            "Request body is not valid JSON",
            400,
        )))
    }

    pub fn message(&self) -> &str {
        match self {
            RequestError::MalformedBody(json) | RequestError::MissingToken(json) => {
                &json.0.message
            }
        }
    }
}
