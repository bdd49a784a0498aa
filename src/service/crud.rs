//! Read-only queries for people, planets and users.

use crate::error::AppError;
use crate::models::{People, Planet, User};
use sqlx::any::AnyRow;
use sqlx::{AnyPool, FromRow};

const PEOPLE_COLUMNS: &str = "id, name, birth_year, gender";
const PLANET_COLUMNS: &str = "id, name, climate, population";
const USER_COLUMNS: &str = "id, username, email";

pub struct CrudService;

impl CrudService {
    pub async fn list_people(pool: &AnyPool) -> Result<Vec<People>, AppError> {
        let sql = format!("SELECT {} FROM people ORDER BY id", PEOPLE_COLUMNS);
        Self::fetch_all(pool, &sql).await
    }

    pub async fn get_person(pool: &AnyPool, id: i64) -> Result<Option<People>, AppError> {
        let sql = format!("SELECT {} FROM people WHERE id = $1", PEOPLE_COLUMNS);
        Self::fetch_by_id(pool, &sql, id).await
    }

    pub async fn list_planets(pool: &AnyPool) -> Result<Vec<Planet>, AppError> {
        let sql = format!("SELECT {} FROM planets ORDER BY id", PLANET_COLUMNS);
        Self::fetch_all(pool, &sql).await
    }

    pub async fn get_planet(pool: &AnyPool, id: i64) -> Result<Option<Planet>, AppError> {
        let sql = format!("SELECT {} FROM planets WHERE id = $1", PLANET_COLUMNS);
        Self::fetch_by_id(pool, &sql, id).await
    }

    pub async fn list_users(pool: &AnyPool) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS);
        Self::fetch_all(pool, &sql).await
    }

    pub async fn get_user(pool: &AnyPool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        Self::fetch_by_id(pool, &sql, id).await
    }

    async fn fetch_all<T>(pool: &AnyPool, sql: &str) -> Result<Vec<T>, AppError>
    where
        T: for<'r> FromRow<'r, AnyRow> + Send + Unpin,
    {
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, T>(sql).fetch_all(pool).await?;
        Ok(rows)
    }

    async fn fetch_by_id<T>(pool: &AnyPool, sql: &str, id: i64) -> Result<Option<T>, AppError>
    where
        T: for<'r> FromRow<'r, AnyRow> + Send + Unpin,
    {
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, T>(sql).bind(id).fetch_optional(pool).await?;
        Ok(row)
    }
}
