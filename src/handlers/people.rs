use crate::error::AppError;
use crate::extractors::ResourcePath;
use crate::models::People;
use crate::response::listing;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

pub async fn list_people(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let people = CrudService::list_people(&state.pool).await?;
    listing("people", people.iter().map(People::summary).collect())
}

pub async fn get_person(
    State(state): State<AppState>,
    ResourcePath(people_id): ResourcePath<i64>,
) -> Result<Json<People>, AppError> {
    let person = CrudService::get_person(&state.pool, people_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("people {}", people_id)))?;
    Ok(Json(person))
}
