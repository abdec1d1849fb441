use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::UserRecord;

use super::user::TrailRefResponse;

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    #[oai(default)]
    pub email: String,

    /// Account password
    #[oai(default)]
    pub password: String,
}

/// Signed session token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT to send as `Authorization: Bearer <token>`
    pub token: String,
}

/// Profile of the authenticated caller
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub bookmarked_trails: Vec<TrailRefResponse>,
    pub completed_trails: Vec<TrailRefResponse>,
    /// Account creation time (RFC 3339)
    pub date: String,
}

impl From<UserRecord> for CurrentUserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            bookmarked_trails: TrailRefResponse::from_list(&user.bookmarked),
            completed_trails: TrailRefResponse::from_list(&user.completed),
            date: super::format_timestamp(user.created_at),
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
        }
    }
}
