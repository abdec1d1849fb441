use crate::errors::InternalError;
use crate::errors::internal::{FieldViolation, ValidationError};

/// Collects field-level input failures
///
/// Every check runs; `finish` reports all violations together.
#[derive(Debug, Default)]
pub struct FieldValidator {
    violations: Vec<FieldViolation>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when the value is empty after trimming whitespace
    pub fn require(mut self, field: &str, value: &str, message: &str) -> Self {
        if value.trim().is_empty() {
            self.push(field, message);
        }
        self
    }

    /// Fails when the value has fewer than `min` characters
    pub fn min_chars(mut self, field: &str, value: &str, min: usize, message: &str) -> Self {
        if value.chars().count() < min {
            self.push(field, message);
        }
        self
    }

    fn push(&mut self, field: &str, message: &str) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn finish(self) -> Result<(), InternalError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            }
            .into())
        }
    }
}
