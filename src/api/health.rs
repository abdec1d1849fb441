use chrono::Utc;
use poem_openapi::{OpenApi, Tags, payload::Json};
use sea_orm::DatabaseConnection;

use crate::types::dto::common::HealthResponse;

/// Liveness endpoint, also reports whether the database answers
pub struct HealthApi {
    db: DatabaseConnection,
}

impl HealthApi {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Tags)]
enum HealthTags {
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Service and database status
    #[oai(path = "/health", method = "get", tag = "HealthTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let (status, database) = match self.db.ping().await {
            Ok(()) => ("healthy", "up"),
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                ("degraded", "down")
            }
        };

        Json(HealthResponse {
            status: status.to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
