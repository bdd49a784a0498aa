//! Shared application state for all routes.

use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    /// Built once at start-up; sqlite or postgres behind the `Any` driver.
    pub pool: AnyPool,
}
