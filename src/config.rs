//! Process configuration from environment variables (optionally loaded from `.env`).

use crate::error::ConfigError;

/// Used when `DATABASE_URL` is not set: a SQLite file under /tmp.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQL dialect behind the connection string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatabaseBackend {
    Sqlite,
    Postgres,
}

impl DatabaseBackend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("sqlite:") {
            Ok(DatabaseBackend::Sqlite)
        } else if url.starts_with("postgresql://") || url.starts_with("postgres://") {
            Ok(DatabaseBackend::Postgres)
        } else {
            let scheme = url.split(':').next().unwrap_or(url);
            Err(ConfigError::UnsupportedDatabase(scheme.to_string()))
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub backend: DatabaseBackend,
    pub port: u16,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => normalize_database_url(url.trim()),
            _ => DEFAULT_DATABASE_URL.to_string(),
        };
        let backend = DatabaseBackend::from_url(&database_url)?;

        let port = match lookup("PORT") {
            Some(val) => val
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidSetting { key: "PORT", value: val })?,
            None => DEFAULT_PORT,
        };

        let max_connections = match lookup("MAX_CONNECTIONS") {
            Some(val) => match val.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidSetting {
                        key: "MAX_CONNECTIONS",
                        value: val,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            backend,
            port,
            max_connections,
        })
    }
}

/// Hosting providers hand out `postgres://` urls; rewrite them to the canonical `postgresql://`.
fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}
