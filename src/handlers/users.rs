use crate::error::AppError;
use crate::extractors::ResourcePath;
use crate::models::User;
use crate::response::listing;
use crate::service::{CrudService, FavoriteService};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let users = CrudService::list_users(&state.pool).await?;
    listing("users", users)
}

pub async fn get_user(
    State(state): State<AppState>,
    ResourcePath(user_id): ResourcePath<i64>,
) -> Result<Json<User>, AppError> {
    let user = CrudService::get_user(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;
    Ok(Json(user))
}

pub async fn list_user_favorites(
    State(state): State<AppState>,
    ResourcePath(user_id): ResourcePath<i64>,
) -> Result<Json<Value>, AppError> {
    let favorites = FavoriteService::list_for_user(&state.pool, user_id).await?;
    listing("favorites", favorites)
}
