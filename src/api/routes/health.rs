//! Root liveness route.

use crate::api::{handlers::health, state::AppState};
use axum::{Router, routing::get};

/// Mounts `GET /`.
#[must_use]
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health::root))
}
