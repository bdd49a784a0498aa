mod api_common_router;

use crate::config::DatabaseBackend;
use crate::routes::app;
use crate::schema::ensure_schema;
use crate::state::AppState;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::Value;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use tower::ServiceExt;

// a single in-memory connection that never gets recycled, so the data lives as long as the pool
pub(crate) async fn test_state() -> AppState {
    install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ensure_schema(&pool, DatabaseBackend::Sqlite).await.unwrap();
    AppState { pool }
}

pub(crate) async fn insert_person(pool: &AnyPool, name: &str, birth_year: &str, gender: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO people (name, birth_year, gender) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(birth_year)
    .bind(gender)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub(crate) async fn insert_planet_with_id(
    pool: &AnyPool,
    id: i64,
    name: &str,
    climate: &str,
    population: &str,
) {
    sqlx::query("INSERT INTO planets (id, name, climate, population) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(name)
        .bind(climate)
        .bind(population)
        .execute(pool)
        .await
        .unwrap();
}

pub(crate) async fn insert_user(pool: &AnyPool, username: &str, email: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id")
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

// fire one request through the full router (trailing-slash normalization included)
pub(crate) async fn send(state: &AppState, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app(state.clone())
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, body.to_vec())
}

pub(crate) async fn send_json(state: &AppState, method: Method, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(state, method, uri).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}
