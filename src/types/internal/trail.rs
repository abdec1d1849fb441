use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::trail;

/// Comment embedded in a trail document
///
/// `name` and `avatar` are snapshots of the author's profile taken when the
/// comment was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Authoring user id
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    /// Unix timestamp
    pub date: i64,
}

/// Comments on a trail, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentThread(VecDeque<Comment>);

impl CommentThread {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }

    pub fn push_newest(&mut self, comment: Comment) {
        self.0.push_front(comment);
    }

    pub fn find(&self, comment_id: &str) -> Option<&Comment> {
        self.0.iter().find(|comment| comment.id == comment_id)
    }

    /// Remove the comment with the given id
    pub fn remove(&mut self, comment_id: &str) -> Option<Comment> {
        let index = self.0.iter().position(|comment| comment.id == comment_id)?;
        self.0.remove(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fields required to create a trail
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTrail {
    pub name: String,
    pub location: String,
    pub coordinates: String,
    pub difficulty: String,
    pub length: String,
    pub elevation_gain: String,
    pub image_link: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// A stored trail with its decoded embedded lists
#[derive(Debug, Clone, PartialEq)]
pub struct TrailRecord {
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
    pub comments: CommentThread,
    pub created_at: i64,
}

impl TryFrom<trail::Model> for TrailRecord {
    type Error = InternalError;

    fn try_from(model: trail::Model) -> Result<Self, Self::Error> {
        let tags: Vec<String> = serde_json::from_str(&model.tags)
            .map_err(|e| InternalError::parse("trail tags", e.to_string()))?;
        let comments: CommentThread = serde_json::from_str(&model.comments)
            .map_err(|e| InternalError::parse("trail comments", e.to_string()))?;

        Ok(Self {
            id: model.id,
            name: model.name,
            location: model.location,
            coordinates: model.coordinates,
            difficulty: model.difficulty,
            length: model.length,
            elevation_gain: model.elevation_gain,
            image_link: model.image_link,
            description: model.description,
            tags,
            comments,
            created_at: model.created_at,
        })
    }
}
