use thiserror::Error;

/// A server setting that could not be used at startup
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Invalid setting '{setting_name}': {reason}")]
    InvalidSetting { setting_name: String, reason: String },

    #[error("Failed to parse setting '{setting_name}': {error}")]
    ParseError { setting_name: String, error: String },
}
