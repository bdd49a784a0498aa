//! Favorites: per-user listing, insert and delete-first-match.

use crate::error::AppError;
use crate::models::{Favorite, FavoriteTarget};
use sqlx::AnyPool;

pub struct FavoriteService;

impl FavoriteService {
    /// All favorites of `user_id`, oldest first. Does not check that the user exists.
    pub async fn list_for_user(pool: &AnyPool, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        let sql = "SELECT id, user_id, planet_id, people_id FROM favorites WHERE user_id = $1 ORDER BY id";
        tracing::debug!(sql = %sql, user_id, "query");
        let rows = sqlx::query_as::<_, Favorite>(sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Insert a favorite and return its id. Duplicates are allowed.
    pub async fn add(pool: &AnyPool, user_id: i64, target: FavoriteTarget) -> Result<i64, AppError> {
        let sql = format!(
            "INSERT INTO favorites (user_id, {}) VALUES ($1, $2) RETURNING id",
            target.column()
        );
        tracing::debug!(sql = %sql, user_id, target_id = target.id(), "query");
        let id = sqlx::query_scalar::<_, i64>(&sql)
            .bind(user_id)
            .bind(target.id())
            .fetch_one(pool)
            .await?;
        Ok(id)
    }

    /// Delete the oldest favorite of `user_id` pointing at `target`.
    /// Returns the removed row's id, or None when nothing matched.
    pub async fn remove(
        pool: &AnyPool,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<Option<i64>, AppError> {
        let select = format!(
            "SELECT id FROM favorites WHERE user_id = $1 AND {} = $2 ORDER BY id LIMIT 1",
            target.column()
        );
        let mut tx = pool.begin().await?;
        tracing::debug!(sql = %select, user_id, target_id = target.id(), "query (tx)");
        let found = sqlx::query_scalar::<_, i64>(&select)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(&mut *tx)
            .await?;
        let Some(id) = found else {
            tx.rollback().await?;
            return Ok(None);
        };
        tracing::debug!(id, "delete favorite (tx)");
        sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(id))
    }
}
