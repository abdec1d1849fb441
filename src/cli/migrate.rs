use crate::config::{ServerSettings, init_database, migrate_database};

/// Run database migrations
///
/// Connects to the configured database and applies all pending migrations.
/// Secrets are not required for this command.
pub async fn run_migrations(settings: &ServerSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let db = init_database(settings.database_url()).await?;
    migrate_database(&db).await?;

    tracing::info!("Database migrations completed");
    Ok(())
}
