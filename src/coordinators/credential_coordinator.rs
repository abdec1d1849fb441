use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::providers::{CryptoProvider, FieldValidator, TokenProvider};
use crate::stores::UserStore;
use crate::types::internal::context::RequestContext;
use crate::types::internal::{NewUser, UserRecord};

/// Avatar stored when registration omits one
pub const DEFAULT_AVATAR: &str = "https://www.gravatar.com/avatar/a?s=200&r=pg&d=mm";

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Orchestrates registration, login and current-user lookup
pub struct CredentialCoordinator {
    user_store: Arc<UserStore>,
    crypto_provider: Arc<CryptoProvider>,
    token_provider: Arc<TokenProvider>,
}

impl CredentialCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_store: app_data.user_store.clone(),
            crypto_provider: app_data.crypto_provider.clone(),
            token_provider: app_data.token_provider.clone(),
        }
    }

    /// Register a new account and return a session token for it
    ///
    /// Coordinates the sequence of operations:
    /// 1. Validate name, email and password length
    /// 2. Reject an email that is already registered
    /// 3. Hash the password and persist the user
    /// 4. Sign a token for the new user id
    pub async fn register(
        &self,
        ctx: &RequestContext,
        name: String,
        email: String,
        password: String,
        avatar: Option<String>,
    ) -> Result<String, InternalError> {
        FieldValidator::new()
            .require("name", &name, "Name is required")
            .require("email", &email, "Please include a valid email")
            .min_chars(
                "password",
                &password,
                MIN_PASSWORD_CHARS,
                "Please enter a password with 6 or more characters",
            )
            .finish()?;

        if self.user_store.find_by_email(&email).await?.is_some() {
            return Err(CredentialError::DuplicateEmail { email }.into());
        }

        let avatar = avatar
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

        let password_hash = self.crypto_provider.hash_password(&password)?;

        let user = self
            .user_store
            .insert_user(NewUser {
                name,
                email,
                password_hash,
                avatar,
            })
            .await?;

        tracing::info!(request_id = %ctx.request_id, user_id = %user.id, "User registered");

        self.token_provider.generate_jwt(&user.id)
    }

    /// Exchange email and password for a session token
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn login(
        &self,
        ctx: &RequestContext,
        email: String,
        password: String,
    ) -> Result<String, InternalError> {
        FieldValidator::new()
            .require("email", &email, "Please include a valid email")
            .require("password", &password, "Password is required")
            .finish()?;

        let Some(user) = self.user_store.find_by_email(&email).await? else {
            tracing::debug!(request_id = %ctx.request_id, "Login for unknown email");
            return Err(CredentialError::InvalidCredentials.into());
        };

        if !self
            .crypto_provider
            .verify_password(&password, &user.password_hash)?
        {
            tracing::debug!(request_id = %ctx.request_id, user_id = %user.id, "Login with wrong password");
            return Err(CredentialError::InvalidCredentials.into());
        }

        tracing::info!(request_id = %ctx.request_id, user_id = %user.id, "User logged in");

        self.token_provider.generate_jwt(&user.id)
    }

    /// Profile of the authenticated caller
    pub async fn current_user(&self, ctx: &RequestContext) -> Result<UserRecord, InternalError> {
        let user_id = ctx.caller_id()?;

        self.user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                CredentialError::UserIdNotFound {
                    user_id: user_id.to_string(),
                }
                .into()
            })
    }
}
