use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::{CatalogError, CredentialError};
use crate::providers::FieldValidator;
use crate::stores::{TrailStore, UserStore};
use crate::types::internal::context::RequestContext;
use crate::types::internal::{Comment, CommentThread, NewTrail, TrailRecord, UserRecord};

/// Orchestrates trail creation, lookup and comment threads
pub struct TrailCoordinator {
    trail_store: Arc<TrailStore>,
    user_store: Arc<UserStore>,
}

impl TrailCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            trail_store: app_data.trail_store.clone(),
            user_store: app_data.user_store.clone(),
        }
    }

    pub async fn create_trail(
        &self,
        ctx: &RequestContext,
        new_trail: NewTrail,
    ) -> Result<TrailRecord, InternalError> {
        self.require_caller(ctx).await?;

        FieldValidator::new()
            .require("name", &new_trail.name, "Name is required")
            .require("location", &new_trail.location, "Location is required")
            .require("coordinates", &new_trail.coordinates, "Coordinates are required")
            .require("difficulty", &new_trail.difficulty, "Difficulty is required")
            .require("length", &new_trail.length, "Length is required")
            .require("elevationGain", &new_trail.elevation_gain, "Elevation Gain is required")
            .require("imageLink", &new_trail.image_link, "Image Link is required")
            .require("description", &new_trail.description, "Description is required")
            .finish()?;

        let trail = self.trail_store.insert_trail(new_trail).await?;

        tracing::info!(request_id = %ctx.request_id, trail_id = %trail.id, "Trail created");

        Ok(trail)
    }

    pub async fn list_trails(&self, ctx: &RequestContext) -> Result<Vec<TrailRecord>, InternalError> {
        self.require_caller(ctx).await?;
        self.trail_store.list_by_name().await
    }

    pub async fn get_trail(
        &self,
        ctx: &RequestContext,
        trail_id: &str,
    ) -> Result<TrailRecord, InternalError> {
        self.require_caller(ctx).await?;
        self.require_trail(trail_id).await
    }

    /// Insert a comment at the head of the trail's thread
    ///
    /// The comment carries a snapshot of the caller's name and avatar.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        trail_id: &str,
        text: String,
    ) -> Result<CommentThread, InternalError> {
        let author = self.require_caller(ctx).await?;

        FieldValidator::new()
            .require("text", &text, "Text is required")
            .finish()?;

        let mut trail = self.require_trail(trail_id).await?;

        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            user: author.id,
            text,
            name: author.name,
            avatar: author.avatar,
            date: Utc::now().timestamp(),
        };
        let comment_id = comment.id.clone();

        trail.comments.push_newest(comment);
        self.trail_store
            .update_comments(&trail.id, &trail.comments)
            .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            trail_id = %trail.id,
            comment_id = %comment_id,
            "Comment added"
        );

        Ok(trail.comments)
    }

    /// Remove the comment with `comment_id` if the caller wrote it
    pub async fn delete_comment(
        &self,
        ctx: &RequestContext,
        trail_id: &str,
        comment_id: &str,
    ) -> Result<CommentThread, InternalError> {
        let caller_id = self.require_caller(ctx).await?.id;

        let mut trail = self.require_trail(trail_id).await?;

        let author = trail
            .comments
            .find(comment_id)
            .map(|comment| comment.user.clone())
            .ok_or_else(|| CatalogError::CommentNotFound {
                comment_id: comment_id.to_string(),
            })?;

        if author != caller_id {
            return Err(CatalogError::NotCommentAuthor {
                comment_id: comment_id.to_string(),
                user_id: caller_id.to_string(),
            }
            .into());
        }

        trail.comments.remove(comment_id);
        self.trail_store
            .update_comments(&trail.id, &trail.comments)
            .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            trail_id = %trail.id,
            comment_id = %comment_id,
            "Comment deleted"
        );

        Ok(trail.comments)
    }

    /// The caller's stored account; a token outliving its user is rejected
    async fn require_caller(&self, ctx: &RequestContext) -> Result<UserRecord, InternalError> {
        let caller_id = ctx.caller_id()?;

        self.user_store.find_by_id(caller_id).await?.ok_or_else(|| {
            CredentialError::UserIdNotFound {
                user_id: caller_id.to_string(),
            }
            .into()
        })
    }

    async fn require_trail(&self, trail_id: &str) -> Result<TrailRecord, InternalError> {
        self.trail_store
            .find_by_id(trail_id)
            .await?
            .ok_or_else(|| {
                CatalogError::TrailNotFound {
                    trail_id: trail_id.to_string(),
                }
                .into()
            })
    }
}
