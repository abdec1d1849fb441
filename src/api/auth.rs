use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::{Api, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::CredentialCoordinator;
use crate::errors::AuthError;
use crate::providers::TokenProvider;
use crate::types::dto::auth::{CurrentUserResponse, LoginRequest, TokenResponse};
use crate::types::internal::context::RequestContext;

/// Session endpoints
pub struct AuthApi {
    credential_coordinator: CredentialCoordinator,
    token_provider: Arc<TokenProvider>,
}

impl AuthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: app_data.token_provider.clone(),
            credential_coordinator: CredentialCoordinator::new(app_data),
        }
    }
}

impl Api for AuthApi {
    fn token_provider(&self) -> &TokenProvider {
        &self.token_provider
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Log in with email and password to receive a session token
    #[oai(path = "/", method = "post", tag = "AuthTags::Authentication")]
    async fn login(
        &self,
        req: &Request,
        body: Json<LoginRequest>,
    ) -> Result<Json<TokenResponse>, AuthError> {
        let ctx = RequestContext::from_request(req);
        let body = body.0;

        let token = self
            .credential_coordinator
            .login(&ctx, body.email, body.password)
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(Json(TokenResponse { token }))
    }

    /// Profile of the user the token was issued to
    #[oai(path = "/", method = "get", tag = "AuthTags::Authentication")]
    async fn current_user(
        &self,
        req: &Request,
        auth: BearerAuth,
    ) -> Result<Json<CurrentUserResponse>, AuthError> {
        let ctx = self
            .authenticate(req, &auth)
            .map_err(AuthError::from_internal_error)?;

        let user = self
            .credential_coordinator
            .current_user(&ctx)
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(Json(CurrentUserResponse::from(user)))
    }
}
