use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of a user's trail lists an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailListKind {
    Bookmarked,
    Completed,
}

impl TrailListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailListKind::Bookmarked => "bookmarked",
            TrailListKind::Completed => "completed",
        }
    }
}

impl fmt::Display for TrailListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference from a user to a trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailRef {
    pub trail: String,
}

/// Ordered set of trail references, newest first
///
/// A trail id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrailList(VecDeque<TrailRef>);

impl TrailList {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }

    pub fn contains(&self, trail_id: &str) -> bool {
        self.0.iter().any(|entry| entry.trail == trail_id)
    }

    /// Insert at the head. Returns false if the trail is already present.
    pub fn add(&mut self, trail_id: &str) -> bool {
        if self.contains(trail_id) {
            return false;
        }
        self.0.push_front(TrailRef {
            trail: trail_id.to_owned(),
        });
        true
    }

    /// Returns false if the trail was not present.
    pub fn remove(&mut self, trail_id: &str) -> bool {
        match self.0.iter().position(|entry| entry.trail == trail_id) {
            Some(index) => self.0.remove(index).is_some(),
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailRef> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
