use crate::errors::InternalError;
use crate::types::db::user;

use super::trail_list::{TrailList, TrailListKind};

/// Fields required to persist a new account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
}

/// A stored user with decoded trail lists
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
    pub bookmarked: TrailList,
    pub completed: TrailList,
    pub created_at: i64,
}

impl UserRecord {
    pub fn trail_list(&self, kind: TrailListKind) -> &TrailList {
        match kind {
            TrailListKind::Bookmarked => &self.bookmarked,
            TrailListKind::Completed => &self.completed,
        }
    }

    pub fn trail_list_mut(&mut self, kind: TrailListKind) -> &mut TrailList {
        match kind {
            TrailListKind::Bookmarked => &mut self.bookmarked,
            TrailListKind::Completed => &mut self.completed,
        }
    }
}

impl TryFrom<user::Model> for UserRecord {
    type Error = InternalError;

    fn try_from(model: user::Model) -> Result<Self, Self::Error> {
        let bookmarked = serde_json::from_str(&model.bookmarked_trails)
            .map_err(|e| InternalError::parse("bookmarked trails", e.to_string()))?;
        let completed = serde_json::from_str(&model.completed_trails)
            .map_err(|e| InternalError::parse("completed trails", e.to_string()))?;

        Ok(Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            avatar: model.avatar,
            bookmarked,
            completed,
            created_at: model.created_at,
        })
    }
}
