//! Liveness handler.

use crate::api::dto::HealthResponse;
use axum::Json;

/// GET /
pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        message: "Task board API is running".to_owned(),
    })
}
