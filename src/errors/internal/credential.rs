use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists: {email}")]
    DuplicateEmail { email: String },

    /// Token subject does not resolve to a stored user
    #[error("User ID not found: {user_id}")]
    UserIdNotFound { user_id: String },

    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },

    #[error("Expired token")]
    ExpiredToken,
}

impl CredentialError {
    /// Create an invalid token error
    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }
}
