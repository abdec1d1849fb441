use std::sync::Arc;

use poem::Request;
use poem_openapi::param::Path;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::{Api, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::{CredentialCoordinator, ProfileCoordinator};
use crate::errors::UserError;
use crate::providers::TokenProvider;
use crate::types::dto::auth::TokenResponse;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::user::{RegisterRequest, TrailRefResponse};
use crate::types::internal::TrailListKind;
use crate::types::internal::context::RequestContext;

/// Account and trail-list endpoints
pub struct UserApi {
    credential_coordinator: CredentialCoordinator,
    profile_coordinator: ProfileCoordinator,
    token_provider: Arc<TokenProvider>,
}

impl UserApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: app_data.token_provider.clone(),
            credential_coordinator: CredentialCoordinator::new(app_data.clone()),
            profile_coordinator: ProfileCoordinator::new(app_data),
        }
    }

    async fn add(
        &self,
        req: &Request,
        auth: &BearerAuth,
        kind: TrailListKind,
        trail_id: &str,
    ) -> Result<Json<Vec<TrailRefResponse>>, UserError> {
        let ctx = self
            .authenticate(req, auth)
            .map_err(UserError::from_internal_error)?;

        let list = self
            .profile_coordinator
            .add_to_list(&ctx, kind, trail_id)
            .await
            .map_err(UserError::from_internal_error)?;

        Ok(Json(TrailRefResponse::from_list(&list)))
    }

    async fn remove(
        &self,
        req: &Request,
        auth: &BearerAuth,
        kind: TrailListKind,
        trail_id: &str,
    ) -> Result<Json<Vec<TrailRefResponse>>, UserError> {
        let ctx = self
            .authenticate(req, auth)
            .map_err(UserError::from_internal_error)?;

        let list = self
            .profile_coordinator
            .remove_from_list(&ctx, kind, trail_id)
            .await
            .map_err(UserError::from_internal_error)?;

        Ok(Json(TrailRefResponse::from_list(&list)))
    }
}

impl Api for UserApi {
    fn token_provider(&self) -> &TokenProvider {
        &self.token_provider
    }
}

#[derive(Tags)]
enum UserTags {
    /// Account registration and deletion
    Users,
    /// Bookmarked and completed trails
    TrailLists,
}

#[OpenApi(prefix_path = "/users")]
impl UserApi {
    /// Register a new account and receive a session token
    #[oai(path = "/", method = "post", tag = "UserTags::Users")]
    async fn register(
        &self,
        req: &Request,
        body: Json<RegisterRequest>,
    ) -> Result<Json<TokenResponse>, UserError> {
        let ctx = RequestContext::from_request(req);
        let body = body.0;

        let token = self
            .credential_coordinator
            .register(&ctx, body.name, body.email, body.password, body.avatar)
            .await
            .map_err(UserError::from_internal_error)?;

        Ok(Json(TokenResponse { token }))
    }

    /// Delete the caller's account
    #[oai(path = "/", method = "delete", tag = "UserTags::Users")]
    async fn delete_account(
        &self,
        req: &Request,
        auth: BearerAuth,
    ) -> Result<Json<MessageResponse>, UserError> {
        let ctx = self
            .authenticate(req, &auth)
            .map_err(UserError::from_internal_error)?;

        self.profile_coordinator
            .delete_account(&ctx)
            .await
            .map_err(UserError::from_internal_error)?;

        Ok(Json(MessageResponse {
            msg: "User deleted".to_string(),
        }))
    }

    /// Bookmark a trail
    #[oai(path = "/bookmarked/add/:id", method = "put", tag = "UserTags::TrailLists")]
    async fn add_bookmark(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<Vec<TrailRefResponse>>, UserError> {
        self.add(req, &auth, TrailListKind::Bookmarked, &id.0).await
    }

    /// Remove a bookmark
    #[oai(path = "/bookmarked/remove/:id", method = "put", tag = "UserTags::TrailLists")]
    async fn remove_bookmark(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<Vec<TrailRefResponse>>, UserError> {
        self.remove(req, &auth, TrailListKind::Bookmarked, &id.0).await
    }

    /// Mark a trail as completed
    #[oai(path = "/completed/add/:id", method = "put", tag = "UserTags::TrailLists")]
    async fn add_completed(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<Vec<TrailRefResponse>>, UserError> {
        self.add(req, &auth, TrailListKind::Completed, &id.0).await
    }

    /// Unmark a completed trail
    #[oai(path = "/completed/remove/:id", method = "put", tag = "UserTags::TrailLists")]
    async fn remove_completed(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<Vec<TrailRefResponse>>, UserError> {
        self.remove(req, &auth, TrailListKind::Completed, &id.0).await
    }
}
