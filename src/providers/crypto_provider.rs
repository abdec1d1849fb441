use std::fmt;
use std::sync::Arc;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString},
};

use crate::config::SecretManager;
use crate::errors::InternalError;

/// Password hashing provider
///
/// Hashes with Argon2id, a random per-user salt and the server-side pepper as
/// the Argon2 secret parameter. Stored values are PHC strings.
pub struct CryptoProvider {
    secret_manager: Arc<SecretManager>,
}

impl CryptoProvider {
    pub fn new(secret_manager: Arc<SecretManager>) -> Self {
        Self { secret_manager }
    }

    fn argon2(&self) -> Result<Argon2<'_>, InternalError> {
        Argon2::new_with_secret(
            self.secret_manager.password_pepper().as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| InternalError::crypto("argon2_init", e.to_string()))
    }

    /// Hash a plaintext password into a PHC string
    pub fn hash_password(&self, password: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);

        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| InternalError::crypto("hash_password", e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Check a plaintext password against a stored PHC string
    ///
    /// Returns `Ok(false)` on mismatch. A stored value that is not a valid PHC
    /// string is an internal error.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, InternalError> {
        let parsed_hash = PasswordHash::new(stored_hash)
            .map_err(|e| InternalError::parse("password hash", e.to_string()))?;

        match self.argon2()?.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(InternalError::crypto("verify_password", e.to_string())),
        }
    }
}

impl fmt::Debug for CryptoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoProvider")
            .field("secret_manager", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn create_test_crypto_provider(pepper: &str) -> CryptoProvider {
        let env = MockEnvironment::empty()
            .with_var("JWT_SECRET", "test-secret-key-minimum-32-characters-long")
            .with_var("PASSWORD_PEPPER", pepper);
        let secret_manager = SecretManager::from_env_provider(&env).unwrap();
        CryptoProvider::new(Arc::new(secret_manager))
    }

    #[test]
    fn test_hash_is_argon2id_phc_string() {
        let crypto = create_test_crypto_provider("test-pepper-for-unit-tests");

        let hash = crypto.hash_password("secret1").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("secret1"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let crypto = create_test_crypto_provider("test-pepper-for-unit-tests");

        let first = crypto.hash_password("secret1").unwrap();
        let second = crypto.hash_password("secret1").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_accepts_correct_password() {
        let crypto = create_test_crypto_provider("test-pepper-for-unit-tests");
        let hash = crypto.hash_password("secret1").unwrap();

        assert!(crypto.verify_password("secret1", &hash).unwrap());
        assert!(!crypto.verify_password("secret2", &hash).unwrap());
    }

    #[test]
    fn test_verify_fails_with_different_pepper() {
        let hashing = create_test_crypto_provider("test-pepper-for-unit-tests");
        let verifying = create_test_crypto_provider("another-pepper-16-chars");
        let hash = hashing.hash_password("secret1").unwrap();

        assert!(!verifying.verify_password("secret1", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let crypto = create_test_crypto_provider("test-pepper-for-unit-tests");

        let result = crypto.verify_password("secret1", "not-a-phc-string");

        assert!(matches!(result, Err(InternalError::Parse { .. })));
    }

    #[test]
    fn test_debug_does_not_expose_pepper() {
        let crypto = create_test_crypto_provider("test-pepper-for-unit-tests");

        let debug_output = format!("{:?}", crypto);

        assert!(debug_output.contains("<redacted>"));
        assert!(!debug_output.contains("test-pepper"));
    }
}
