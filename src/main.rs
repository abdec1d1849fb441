use std::sync::Arc;

use clap::Parser;
use poem::{Server, listener::TcpListener};

use trail_catalog_backend::AppData;
use trail_catalog_backend::api::build_app;
use trail_catalog_backend::cli::{Cli, Commands, migrate};
use trail_catalog_backend::config::{
    SecretManager, ServerSettings, init_database, init_logging, migrate_database,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load environment variables from .env file (or the one given on the command line)
    match &cli.env_file {
        Some(path) => {
            dotenv::from_filename(path)?;
        }
        None => {
            dotenv::dotenv().ok();
        }
    }

    init_logging()?;

    let settings = ServerSettings::from_env()?;
    tracing::debug!("Server settings loaded: {:?}", settings);

    if cli.command() == Commands::Migrate {
        return migrate::run_migrations(&settings).await;
    }

    // Secrets are validated before anything touches the database
    let secret_manager = Arc::new(SecretManager::init()?);
    tracing::info!("Secrets loaded");

    let db = init_database(settings.database_url()).await?;
    tracing::info!("Connected to database: {}", settings.database_url());

    migrate_database(&db).await?;
    tracing::info!("Database migrations completed");

    let app_data = Arc::new(AppData::init(db, secret_manager, &settings));

    let address = settings.server_address();
    let app = build_app(app_data, &format!("http://{}/api", address));

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
