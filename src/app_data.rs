use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{SecretManager, ServerSettings};
use crate::providers::{CryptoProvider, TokenProvider};
use crate::stores::{TrailStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once at startup and shared across
/// coordinators. Nothing in here is mutated after construction.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ├─ db (DatabaseConnection)
///   ├─ secret_manager (Arc<SecretManager>)
///   ├─ user_store / trail_store (Arc<..Store>)
///   └─ crypto_provider / token_provider (Arc<..Provider>)
///   ↓ wrapped in Arc<AppData>
///   ├─ CredentialCoordinator::new(app_data)
///   ├─ TrailCoordinator::new(app_data)
///   └─ ProfileCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub secret_manager: Arc<SecretManager>,
    pub user_store: Arc<UserStore>,
    pub trail_store: Arc<TrailStore>,
    pub crypto_provider: Arc<CryptoProvider>,
    pub token_provider: Arc<TokenProvider>,
}

impl AppData {
    /// Build application data from an already migrated connection
    pub fn init(
        db: DatabaseConnection,
        secret_manager: Arc<SecretManager>,
        settings: &ServerSettings,
    ) -> Self {
        Self::with_token_lifetime(db, secret_manager, settings.jwt_expiration_seconds())
    }

    pub fn with_token_lifetime(
        db: DatabaseConnection,
        secret_manager: Arc<SecretManager>,
        jwt_expiration_seconds: i64,
    ) -> Self {
        tracing::debug!("Creating stores and providers...");

        let user_store = Arc::new(UserStore::new(db.clone()));
        let trail_store = Arc::new(TrailStore::new(db.clone()));
        let crypto_provider = Arc::new(CryptoProvider::new(secret_manager.clone()));
        let token_provider = Arc::new(TokenProvider::new(
            secret_manager.clone(),
            jwt_expiration_seconds,
        ));

        tracing::info!("AppData initialization complete");

        Self {
            db,
            secret_manager,
            user_store,
            trail_store,
            crypto_provider,
            token_provider,
        }
    }
}
