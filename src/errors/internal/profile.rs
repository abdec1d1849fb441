use thiserror::Error;

use crate::types::internal::TrailListKind;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Trail already {kind}: {trail_id}")]
    AlreadyListed {
        kind: TrailListKind,
        trail_id: String,
    },

    #[error("Trail not yet {kind}: {trail_id}")]
    NotListed {
        kind: TrailListKind,
        trail_id: String,
    },
}

impl ProfileError {
    /// Client-facing message, e.g. "Trail already bookmarked"
    pub fn public_message(&self) -> String {
        match self {
            ProfileError::AlreadyListed { kind, .. } => format!("Trail already {}", kind),
            ProfileError::NotListed { kind, .. } => format!("Trail not yet {}", kind),
        }
    }
}
