use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::{Comment, CommentThread, NewTrail, TrailRecord};

use super::format_timestamp;

/// Request model for creating a trail
///
/// Every text field is required and must be non-blank.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreateTrailRequest {
    #[oai(default)]
    pub name: String,
    #[oai(default)]
    pub location: String,
    #[oai(default)]
    pub coordinates: String,
    #[oai(default)]
    pub difficulty: String,
    /// Free text, e.g. "5.2 mi"
    #[oai(default)]
    pub length: String,
    #[oai(default)]
    pub elevation_gain: String,
    #[oai(default)]
    pub image_link: String,
    #[oai(default)]
    pub description: String,
    pub tags: Option<Vec<String>>,
}

impl From<CreateTrailRequest> for NewTrail {
    fn from(req: CreateTrailRequest) -> Self {
        Self {
            name: req.name,
            location: req.location,
            coordinates: req.coordinates,
            difficulty: req.difficulty,
            length: req.length,
            elevation_gain: req.elevation_gain,
            image_link: req.image_link,
            description: req.description,
            tags: req.tags.unwrap_or_default(),
        }
    }
}

/// Request model for posting a comment
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CommentRequest {
    #[oai(default)]
    pub text: String,
}

/// A comment as returned to clients
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    /// Authoring user id
    pub user: String,
    pub text: String,
    /// Author display name when the comment was written
    pub name: String,
    pub avatar: String,
    /// RFC 3339
    pub date: String,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
            user: comment.user.clone(),
            text: comment.text.clone(),
            name: comment.name.clone(),
            avatar: comment.avatar.clone(),
            date: format_timestamp(comment.date),
        }
    }
}

impl CommentResponse {
    pub fn from_thread(thread: &CommentThread) -> Vec<Self> {
        thread.iter().map(Self::from).collect()
    }
}

/// A stored trail
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct TrailResponse {
    pub id: String,
    pub name: String,
    pub location: String,
    pub coordinates: String,
    pub difficulty: String,
    pub length: String,
    pub elevation_gain: String,
    pub image_link: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Newest first
    pub comments: Vec<CommentResponse>,
    /// Creation time (RFC 3339)
    pub date: String,
}

impl From<TrailRecord> for TrailResponse {
    fn from(trail: TrailRecord) -> Self {
        Self {
            comments: CommentResponse::from_thread(&trail.comments),
            date: format_timestamp(trail.created_at),
            id: trail.id,
            name: trail.name,
            location: trail.location,
            coordinates: trail.coordinates,
            difficulty: trail.difficulty,
            length: trail.length,
            elevation_gain: trail.elevation_gain,
            image_link: trail.image_link,
            description: trail.description,
            tags: trail.tags,
        }
    }
}
