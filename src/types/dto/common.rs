use poem_openapi::Object;

use crate::errors::internal::FieldViolation;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// `healthy`, or `degraded` when the database does not answer
    pub status: String,

    /// `up` or `down`
    pub database: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Plain acknowledgement
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub msg: String,
}

/// One failed input field
#[derive(Object, Debug, Clone, PartialEq)]
pub struct FieldErrorResponse {
    /// Request field name
    pub field: String,

    /// Why the field was rejected
    pub message: String,
}

impl From<&FieldViolation> for FieldErrorResponse {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field.clone(),
            message: violation.message.clone(),
        }
    }
}

/// Standardized error response model
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error type or category
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// Per-field details, only present for validation failures
    #[oai(default, skip_serializing_if_is_empty)]
    pub errors: Vec<FieldErrorResponse>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code,
            errors: Vec::new(),
        }
    }

    /// 400 response listing every rejected field
    pub fn validation(violations: &[FieldViolation]) -> Self {
        let message = violations
            .first()
            .map(|v| v.message.clone())
            .unwrap_or_else(|| "Invalid request".to_string());

        Self {
            error: "validation_failed".to_string(),
            message,
            status_code: 400,
            errors: violations.iter().map(FieldErrorResponse::from).collect(),
        }
    }
}
