mod database;
mod env_provider;
pub mod errors;
mod logging;
mod secret_manager;
mod server_settings;

pub use database::{init_database, migrate_database};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::{LoggingConfig, LoggingError, init_logging};
pub use secret_manager::{SecretError, SecretManager};
pub use server_settings::ServerSettings;
