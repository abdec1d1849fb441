use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::TrailList;

/// Request model for account registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[oai(default)]
    pub name: String,

    #[oai(default)]
    pub email: String,

    /// At least 6 characters
    #[oai(default)]
    pub password: String,

    /// Avatar URL; a default image is used when omitted or blank
    pub avatar: Option<String>,
}

/// One entry of a bookmark or completed list
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailRefResponse {
    /// Referenced trail id
    pub trail: String,
}

impl TrailRefResponse {
    pub fn from_list(list: &TrailList) -> Vec<Self> {
        list.iter()
            .map(|entry| Self {
                trail: entry.trail.clone(),
            })
            .collect()
    }
}
