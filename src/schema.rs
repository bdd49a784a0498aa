//! Idempotent DDL for the four tables, run once at start-up.
//! Only the primary key column differs between SQLite and PostgreSQL.

use crate::config::DatabaseBackend;
use crate::error::AppError;
use sqlx::AnyPool;

fn id_column(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
        DatabaseBackend::Postgres => "id BIGSERIAL PRIMARY KEY",
    }
}

/// Foreign key clause for a favorites column. Empty on SQLite: favorites there may name
/// rows that were never created, and sqlx connects with `foreign_keys` on.
fn references(backend: DatabaseBackend, table: &str) -> String {
    match backend {
        DatabaseBackend::Sqlite => String::new(),
        DatabaseBackend::Postgres => format!(" REFERENCES {} (id)", table),
    }
}

/// Tables owned by this service, in creation order.
pub const TABLES: &[&str] = &["people", "planets", "users", "favorites"];

fn table_statements(backend: DatabaseBackend) -> Vec<String> {
    let id = id_column(backend);
    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS people (
                {},
                name TEXT NOT NULL,
                birth_year TEXT,
                gender TEXT
            )
            "#,
            id
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS planets (
                {},
                name TEXT NOT NULL,
                climate TEXT,
                population TEXT
            )
            "#,
            id
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                {},
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL UNIQUE
            )
            "#,
            id
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS favorites (
                {},
                user_id BIGINT NOT NULL{},
                planet_id BIGINT{},
                people_id BIGINT{}
            )
            "#,
            id,
            references(backend, "users"),
            references(backend, "planets"),
            references(backend, "people")
        ),
        "CREATE INDEX IF NOT EXISTS favorites_user_id_idx ON favorites (user_id)".to_string(),
    ]
}

/// Create every table (and the favorites lookup index) that does not exist yet.
/// Existing tables are left untouched.
pub async fn ensure_schema(pool: &AnyPool, backend: DatabaseBackend) -> Result<(), AppError> {
    for sql in table_statements(backend) {
        tracing::debug!(sql = %sql.trim(), "ddl");
        sqlx::query(&sql).execute(pool).await?;
    }
    Ok(())
}
