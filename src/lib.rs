//! Star Wars API: people, planets, users and per-user favorites over a relational database.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::{AppConfig, DatabaseBackend};
pub use error::{AppError, ConfigError};
pub use models::{Favorite, FavoriteTarget, People, Planet, User};
pub use routes::{app, common_routes, resource_routes};
pub use schema::ensure_schema;
pub use service::{CrudService, FavoriteService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
