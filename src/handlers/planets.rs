use crate::error::AppError;
use crate::extractors::ResourcePath;
use crate::models::Planet;
use crate::response::listing;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let planets = CrudService::list_planets(&state.pool).await?;
    listing("planets", planets.iter().map(Planet::summary).collect())
}

pub async fn get_planet(
    State(state): State<AppState>,
    ResourcePath(planet_id): ResourcePath<i64>,
) -> Result<Json<Planet>, AppError> {
    let planet = CrudService::get_planet(&state.pool, planet_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("planet {}", planet_id)))?;
    Ok(Json(planet))
}
