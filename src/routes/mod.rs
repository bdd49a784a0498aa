//! Router assembly.

mod common;
mod resources;

pub use common::common_routes;
pub use resources::resource_routes;

use crate::handlers::sitemap;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// A registered route as listed by the sitemap.
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    pub path: &'static str,
    pub methods: &'static [&'static str],
}

/// Every route `app` serves; the sitemap renders this table.
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint { path: "/", methods: &["GET"] },
    Endpoint { path: "/health", methods: &["GET"] },
    Endpoint { path: "/ready", methods: &["GET"] },
    Endpoint { path: "/people", methods: &["GET"] },
    Endpoint { path: "/people/{people_id}", methods: &["GET"] },
    Endpoint { path: "/planets", methods: &["GET"] },
    Endpoint { path: "/planets/{planet_id}", methods: &["GET"] },
    Endpoint { path: "/users", methods: &["GET"] },
    Endpoint { path: "/users/{user_id}", methods: &["GET"] },
    Endpoint { path: "/users/{user_id}/favorites", methods: &["GET"] },
    Endpoint { path: "/favorites/user/{user_id}/planet/{planet_id}", methods: &["POST", "DELETE"] },
    Endpoint { path: "/favorites/user/{user_id}/people/{people_id}", methods: &["POST", "DELETE"] },
];

/// The full router: sitemap, common and resource routes, with request tracing and permissive CORS.
/// Wrapped so a trailing slash never changes which route matches.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(sitemap))
        .merge(common_routes(state.clone()))
        .merge(resource_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
