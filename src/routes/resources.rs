//! People, planets, users and favorites.

use crate::handlers::{
    add_favorite, delete_favorite, get_person, get_planet, get_user, list_people, list_planets,
    list_user_favorites, list_users,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/:people_id", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planets/:planet_id", get(get_planet))
        .route("/users", get(list_users))
        .route("/users/:user_id", get(get_user))
        .route("/users/:user_id/favorites", get(list_user_favorites))
        .route(
            "/favorites/user/:user_id/planet/:planet_id",
            post(add_favorite).delete(delete_favorite),
        )
        .route(
            "/favorites/user/:user_id/people/:people_id",
            post(add_favorite).delete(delete_favorite),
        )
        .with_state(state)
}
