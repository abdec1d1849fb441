use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Connect to the trail catalog database
///
/// Does NOT run migrations - call `migrate_database()` separately.
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(database_url)
        .await
        .map_err(|source| DatabaseError::Connect { source })?;

    tracing::debug!("Connected to database: {}", database_url);

    Ok(db)
}

/// Run all pending migrations on the provided connection
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
