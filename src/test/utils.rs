// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::app_data::AppData;
use crate::config::{MockEnvironment, SecretManager};
use crate::types::internal::RequestContext;
use crate::types::internal::auth::Claims;

pub const TEST_JWT_EXPIRATION_SECONDS: i64 = 3600;

/// Fresh in-memory database with all migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn test_secret_manager() -> Arc<SecretManager> {
    Arc::new(
        SecretManager::from_env_provider(&MockEnvironment::with_test_secrets())
            .expect("Failed to initialize test SecretManager"),
    )
}

/// AppData over a fresh database with test secrets
pub async fn setup_test_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    Arc::new(AppData::with_token_lifetime(
        db,
        test_secret_manager(),
        TEST_JWT_EXPIRATION_SECONDS,
    ))
}

/// Context as produced by a successful bearer-token check for `user_id`
pub fn authenticated_ctx(user_id: &str) -> RequestContext {
    let claims = Claims {
        sub: user_id.to_string(),
        iat: 0,
        exp: i64::MAX,
    };
    RequestContext::new().with_auth(claims).with_actor_id(user_id)
}
