use std::fmt;

use thiserror::Error;

use crate::config::{EnvironmentProvider, SystemEnvironment};

/// Secret-loading failures
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Required secret '{secret_name}' is missing")]
    Missing { secret_name: String },

    #[error("Secret '{secret_name}' must be at least {expected} characters, got {actual}")]
    InvalidLength {
        secret_name: String,
        expected: usize,
        actual: usize,
    },
}

/// Environment variable and minimum character count for one secret
struct SecretRule {
    var: &'static str,
    min_chars: usize,
}

const JWT_SECRET_RULE: SecretRule = SecretRule {
    var: "JWT_SECRET",
    min_chars: 32,
};

const PASSWORD_PEPPER_RULE: SecretRule = SecretRule {
    var: "PASSWORD_PEPPER",
    min_chars: 16,
};

/// Centralized holder for the JWT signing key and the password pepper
pub struct SecretManager {
    jwt_secret: String,
    password_pepper: String,
}

impl SecretManager {
    /// Load and validate all secrets from the process environment
    pub fn init() -> Result<Self, SecretError> {
        Self::from_env_provider(&SystemEnvironment)
    }

    /// Load and validate all secrets from the given provider
    ///
    /// # Errors
    /// Returns `SecretError` if any required secret is missing or too short
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, SecretError> {
        let jwt_secret = load_secret(env, &JWT_SECRET_RULE)?;
        let password_pepper = load_secret(env, &PASSWORD_PEPPER_RULE)?;

        Ok(Self {
            jwt_secret,
            password_pepper,
        })
    }

    /// HS256 signing key
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Argon2 secret parameter
    pub fn password_pepper(&self) -> &str {
        &self.password_pepper
    }
}

fn load_secret(env: &dyn EnvironmentProvider, rule: &SecretRule) -> Result<String, SecretError> {
    let value = env.get_var(rule.var).ok_or_else(|| SecretError::Missing {
        secret_name: rule.var.to_string(),
    })?;

    let actual = value.chars().count();
    if actual < rule.min_chars {
        return Err(SecretError::InvalidLength {
            secret_name: rule.var.to_string(),
            expected: rule.min_chars,
            actual,
        });
    }

    Ok(value)
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretManager {{ secrets_loaded: 2 }}")
    }
}
