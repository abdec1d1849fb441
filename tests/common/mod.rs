// Common test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use migration::{Migrator, MigratorTrait};
use poem::Endpoint;
use poem::test::TestClient;
use sea_orm::{Database, DatabaseConnection};
use trail_catalog_backend::AppData;
use trail_catalog_backend::api::build_app;
use trail_catalog_backend::config::{EnvironmentProvider, SecretManager};

pub const TEST_JWT_SECRET: &str = "integration-secret-key-minimum-32-chars";
pub const TEST_PEPPER: &str = "integration-pepper-16";

/// Environment provider backed by a fixed map
pub struct TestEnvironment {
    vars: HashMap<String, String>,
}

impl TestEnvironment {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn with_test_secrets() -> Self {
        Self::new(&[("JWT_SECRET", TEST_JWT_SECRET), ("PASSWORD_PEPPER", TEST_PEPPER)])
    }
}

impl EnvironmentProvider for TestEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn setup_test_app_data() -> Arc<AppData> {
    let secret_manager = SecretManager::from_env_provider(&TestEnvironment::with_test_secrets())
        .expect("Failed to load test secrets");

    Arc::new(AppData::with_token_lifetime(
        setup_test_db().await,
        Arc::new(secret_manager),
        3600,
    ))
}

/// HTTP client over the fully composed application
pub async fn setup_test_client() -> TestClient<impl Endpoint> {
    // Owned URL dropped before the client is used
    let server_url = format!("http://{}/api", "localhost:6000");
    TestClient::new(build_app(setup_test_app_data().await, &server_url))
}

/// Helper to manage environment variables in tests
///
/// Cleans up specified environment variables on creation and drop,
/// ensuring test isolation when dealing with global environment state.
pub struct EnvGuard {
    vars: Vec<String>,
}

impl EnvGuard {
    pub fn new(vars: Vec<&str>) -> Self {
        for var in &vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
        Self {
            vars: vars.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}

/// Global mutex for tests that modify environment variables
pub static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());
