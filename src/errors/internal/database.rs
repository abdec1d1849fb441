use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Database connection failed: {source}")]
    Connect {
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Running migrations failed: {source}")]
    Migration {
        #[source]
        source: sea_orm::DbErr,
    },
}
