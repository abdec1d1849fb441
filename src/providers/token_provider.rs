use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::SecretManager;
use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::types::internal::auth::Claims;

/// Issues and validates HS256 session tokens
pub struct TokenProvider {
    secret_manager: Arc<SecretManager>,
    jwt_expiration_seconds: i64,
}

impl TokenProvider {
    pub fn new(secret_manager: Arc<SecretManager>, jwt_expiration_seconds: i64) -> Self {
        Self {
            secret_manager,
            jwt_expiration_seconds,
        }
    }

    /// Sign a token whose subject is `user_id`
    pub fn generate_jwt(&self, user_id: &str) -> Result<String, InternalError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now.saturating_add(self.jwt_expiration_seconds),
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
        )
        .map_err(|e| InternalError::crypto("jwt_generation", format!("Failed to generate JWT: {}", e)))
    }

    /// Validate signature and expiry, returning the claims
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, InternalError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
            &validation,
        )
        .map(|token_data| token_data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => InternalError::from(CredentialError::ExpiredToken),
            ErrorKind::InvalidSignature => {
                InternalError::from(CredentialError::invalid_token("invalid signature"))
            }
            _ => InternalError::from(CredentialError::invalid_token(format!("malformed: {}", e))),
        })
    }

    pub fn jwt_expiration_seconds(&self) -> i64 {
        self.jwt_expiration_seconds
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("secret_manager", &"<redacted>")
            .field("jwt_expiration_seconds", &self.jwt_expiration_seconds)
            .finish()
    }
}

impl fmt::Display for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TokenProvider {{ jwt_expiration: {}s }}",
            self.jwt_expiration_seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

    fn create_test_token_provider(expiration_seconds: i64) -> TokenProvider {
        let secret_manager =
            SecretManager::from_env_provider(&MockEnvironment::with_test_secrets()).unwrap();
        TokenProvider::new(Arc::new(secret_manager), expiration_seconds)
    }

    #[test]
    fn test_generated_token_round_trips_subject() {
        let provider = create_test_token_provider(3600);

        let token = provider.generate_jwt("user-123").unwrap();
        let claims = provider.validate_jwt(&token).unwrap();

        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_default_lifetime_is_applied() {
        let provider = create_test_token_provider(3_600_000);

        let token = provider.generate_jwt("user-123").unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
            &validation,
        )
        .unwrap();

        assert_eq!(decoded.claims.exp - decoded.claims.iat, 3_600_000);
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let provider = create_test_token_provider(3600);
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user-123".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let result = provider.validate_jwt(&token);

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::ExpiredToken))
        ));
    }

    #[test]
    fn test_token_signed_with_other_key_is_invalid() {
        let provider = create_test_token_provider(3600);
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user-123".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let forged = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"attacker-guessed-secret-wrong-value"),
        )
        .unwrap();

        let result = provider.validate_jwt(&forged);

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::InvalidToken { .. }))
        ));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let provider = create_test_token_provider(3600);

        let result = provider.validate_jwt("not.a.jwt");

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::InvalidToken { .. }))
        ));
    }

    #[test]
    fn test_debug_trait_does_not_expose_secrets() {
        let provider = create_test_token_provider(3600);

        let debug_output = format!("{:?}", provider);

        assert!(!debug_output.contains("test-secret-key"));
        assert_eq!(debug_output.matches("<redacted>").count(), 1);
    }

    #[test]
    fn test_display_trait_shows_lifetime_only() {
        let provider = create_test_token_provider(900);

        let display_output = format!("{}", provider);

        assert!(!display_output.contains("test-secret-key"));
        assert!(display_output.contains("900s"));
    }
}
