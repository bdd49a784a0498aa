//! Database bootstrap: driver registration, database creation and pool construction.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlx::migrate::MigrateDatabase;
use sqlx::{Any, AnyPool};

/// Create the database named by `database_url` if it does not exist yet.
/// For SQLite this creates the file; for PostgreSQL it issues CREATE DATABASE via the server.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    install_default_drivers();
    if !Any::database_exists(database_url).await? {
        tracing::info!("database missing, creating");
        Any::create_database(database_url).await?;
    }
    Ok(())
}

/// Open the shared pool handed to every handler through `AppState`.
pub async fn connect(config: &AppConfig) -> Result<AnyPool, AppError> {
    install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}
