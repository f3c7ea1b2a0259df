//! Routes for projects and their tasks.

use crate::api::{
    handlers::{project, task},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, patch},
};

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                -> project::list
/// POST   /                                -> project::create
/// GET    /{id}                            -> project::get_by_id
/// PUT    /{id}                            -> project::update
/// DELETE /{id}                            -> project::delete
///
/// GET    /{id}/tasks                      -> task::list
/// POST   /{id}/tasks                      -> task::create
/// GET    /{id}/tasks/{task_id}            -> task::get_by_id
/// PUT    /{id}/tasks/{task_id}            -> task::update
/// DELETE /{id}/tasks/{task_id}            -> task::delete
/// PATCH  /{id}/tasks/{task_id}/status     -> task::change_status
/// ```
#[must_use]
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/tasks", get(task::list).post(task::create))
        .route(
            "/{id}/tasks/{task_id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route(
            "/{id}/tasks/{task_id}/status",
            patch(task::change_status),
        )
}
