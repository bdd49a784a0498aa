//! Server binary: reads config, prepares the database, mounts the router.

use axum::extract::Request;
use axum::ServiceExt;
use starwars_api::{app, connect, ensure_database_exists, ensure_schema, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("starwars_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(backend = ?config.backend, max_connections = config.max_connections, "configuration loaded");

    ensure_database_exists(&config.database_url).await?;
    let pool = connect(&config).await?;
    ensure_schema(&pool, config.backend).await?;

    let state = AppState { pool };
    let app = app(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
