use std::sync::Arc;

use poem::Request;
use poem_openapi::param::Path;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::{Api, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::TrailCoordinator;
use crate::errors::TrailError;
use crate::providers::TokenProvider;
use crate::types::dto::trail::{CommentRequest, CommentResponse, CreateTrailRequest, TrailResponse};

/// Trail catalog endpoints
pub struct TrailApi {
    trail_coordinator: TrailCoordinator,
    token_provider: Arc<TokenProvider>,
}

impl TrailApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: app_data.token_provider.clone(),
            trail_coordinator: TrailCoordinator::new(app_data),
        }
    }
}

impl Api for TrailApi {
    fn token_provider(&self) -> &TokenProvider {
        &self.token_provider
    }
}

#[derive(Tags)]
enum TrailTags {
    /// Trail records
    Trails,
    /// Comments on a trail
    Comments,
}

#[OpenApi(prefix_path = "/trails")]
impl TrailApi {
    /// Create a trail
    #[oai(path = "/", method = "post", tag = "TrailTags::Trails")]
    async fn create_trail(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<CreateTrailRequest>,
    ) -> Result<Json<TrailResponse>, TrailError> {
        let ctx = self
            .authenticate(req, &auth)
            .map_err(TrailError::from_internal_error)?;

        let trail = self
            .trail_coordinator
            .create_trail(&ctx, body.0.into())
            .await
            .map_err(TrailError::from_internal_error)?;

        Ok(Json(TrailResponse::from(trail)))
    }

    /// All trails, sorted by name
    #[oai(path = "/", method = "get", tag = "TrailTags::Trails")]
    async fn list_trails(
        &self,
        req: &Request,
        auth: BearerAuth,
    ) -> Result<Json<Vec<TrailResponse>>, TrailError> {
        let ctx = self
            .authenticate(req, &auth)
            .map_err(TrailError::from_internal_error)?;

        let trails = self
            .trail_coordinator
            .list_trails(&ctx)
            .await
            .map_err(TrailError::from_internal_error)?;

        Ok(Json(trails.into_iter().map(TrailResponse::from).collect()))
    }

    /// A single trail
    #[oai(path = "/:id", method = "get", tag = "TrailTags::Trails")]
    async fn get_trail(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<TrailResponse>, TrailError> {
        let ctx = self
            .authenticate(req, &auth)
            .map_err(TrailError::from_internal_error)?;

        let trail = self
            .trail_coordinator
            .get_trail(&ctx, &id.0)
            .await
            .map_err(TrailError::from_internal_error)?;

        Ok(Json(TrailResponse::from(trail)))
    }

    /// Comment on a trail; returns the updated comment list
    #[oai(path = "/comment/:id", method = "post", tag = "TrailTags::Comments")]
    async fn add_comment(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<CommentRequest>,
    ) -> Result<Json<Vec<CommentResponse>>, TrailError> {
        let ctx = self
            .authenticate(req, &auth)
            .map_err(TrailError::from_internal_error)?;

        let thread = self
            .trail_coordinator
            .add_comment(&ctx, &id.0, body.0.text)
            .await
            .map_err(TrailError::from_internal_error)?;

        Ok(Json(CommentResponse::from_thread(&thread)))
    }

    /// Delete one of the caller's comments; returns the updated comment list
    #[oai(path = "/comment/:id/:comment_id", method = "delete", tag = "TrailTags::Comments")]
    async fn delete_comment(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<String>,
        comment_id: Path<String>,
    ) -> Result<Json<Vec<CommentResponse>>, TrailError> {
        let ctx = self
            .authenticate(req, &auth)
            .map_err(TrailError::from_internal_error)?;

        let thread = self
            .trail_coordinator
            .delete_comment(&ctx, &id.0, &comment_id.0)
            .await
            .map_err(TrailError::from_internal_error)?;

        Ok(Json(CommentResponse::from_thread(&thread)))
    }
}
