//! Add/remove favorites. Both handlers serve the planet and the people route templates;
//! whichever id the matched template captured selects the target.

use crate::error::AppError;
use crate::extractors::ResourcePath;
use crate::models::FavoriteTarget;
use crate::response::Outcome;
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct FavoritePath {
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

impl FavoritePath {
    fn target(&self) -> Option<FavoriteTarget> {
        FavoriteTarget::from_ids(self.planet_id, self.people_id)
    }
}

pub async fn add_favorite(
    State(state): State<AppState>,
    ResourcePath(path): ResourcePath<FavoritePath>,
) -> Result<Json<Outcome>, AppError> {
    let Some(target) = path.target() else {
        return Ok(Json(Outcome::error("Invalid request")));
    };
    let id = FavoriteService::add(&state.pool, path.user_id, target).await?;
    tracing::info!(favorite_id = id, user_id = path.user_id, kind = target.label(), target_id = target.id(), "favorite added");
    Ok(Json(Outcome::message(format!(
        "{} {} added to favorites for User {}",
        target.label(),
        target.id(),
        path.user_id
    ))))
}

pub async fn delete_favorite(
    State(state): State<AppState>,
    ResourcePath(path): ResourcePath<FavoritePath>,
) -> Result<Json<Outcome>, AppError> {
    let Some(target) = path.target() else {
        return Ok(Json(Outcome::error("Invalid request")));
    };
    match FavoriteService::remove(&state.pool, path.user_id, target).await? {
        Some(id) => {
            tracing::info!(favorite_id = id, user_id = path.user_id, kind = target.label(), target_id = target.id(), "favorite removed");
            Ok(Json(Outcome::message(format!(
                "{} {} removed from favorites for User {}",
                target.label(),
                target.id(),
                path.user_id
            ))))
        }
        None => {
            tracing::warn!(user_id = path.user_id, kind = target.label(), target_id = target.id(), "favorite not found");
            Ok(Json(Outcome::error("Favorite not found")))
        }
    }
}
