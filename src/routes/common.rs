//! Liveness and readiness. Readiness counts the rows of every table, so a database that is
//! reachable but missing the schema reports degraded.

use crate::schema::TABLES;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    rows: BTreeMap<&'static str, i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed_table: Option<&'static str>,
}

async fn health() -> Json<Liveness> {
    Json(Liveness {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let mut rows = BTreeMap::new();
    for table in TABLES {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        match sqlx::query_scalar::<_, i64>(&sql).fetch_one(&state.pool).await {
            Ok(count) => {
                rows.insert(*table, count);
            }
            Err(e) => {
                tracing::warn!(table, error = %e, "readiness check failed");
                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(Readiness {
                        status: "degraded",
                        rows: BTreeMap::new(),
                        failed_table: Some(*table),
                    }),
                );
            }
        }
    }
    (
        StatusCode::OK,
        Json(Readiness {
            status: "ok",
            rows,
            failed_table: None,
        }),
    )
}

/// GET /health (name and version), GET /ready (row count per table).
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
