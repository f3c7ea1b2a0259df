//! Request extractors that report failures as [`ApiError`].

use super::error::{ApiError, ApiResult};
use crate::board::domain::{ProjectId, TaskId};
use axum::extract::FromRequest;

/// JSON body extractor whose rejections render as `400 BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Parses a project id from a path segment.
///
/// A value that is not a UUID cannot name a project, so it is reported as
/// not found rather than as a malformed request.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when `raw` is not a UUID.
pub fn parse_project_id(raw: &str) -> ApiResult<ProjectId> {
    raw.parse().map_err(|_| ApiError::NotFound {
        entity: "project",
        id: raw.to_owned(),
    })
}

/// Parses a task id from a path segment.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when `raw` is not a UUID.
pub fn parse_task_id(raw: &str) -> ApiResult<TaskId> {
    raw.parse().map_err(|_| ApiError::NotFound {
        entity: "task",
        id: raw.to_owned(),
    })
}
