//! Handlers for tasks nested under `/projects/{id}/tasks`.

use crate::api::{
    dto::{ChangeStatusBody, CreateTaskBody, TaskListResponse, TaskResponse, UpdateTaskBody},
    error::ApiResult,
    extract::{JsonBody, parse_project_id, parse_task_id},
    state::AppState,
};
use crate::board::domain::NewTask;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

/// POST /projects/{id}/tasks
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    JsonBody(body): JsonBody<CreateTaskBody>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let project = parse_project_id(&project_id)?;
    let CreateTaskBody {
        title,
        description,
        deadline,
        status,
    } = body;

    let mut input = NewTask::new(title);
    if let Some(text) = description {
        input = input.with_description(text);
    }
    if let Some(date) = deadline {
        input = input.with_deadline(date);
    }
    if let Some(initial) = status {
        input = input.with_status(initial);
    }

    let task = state.tasks.create_task(project, input).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// GET /projects/{id}/tasks
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<TaskListResponse>> {
    let tasks: Vec<TaskResponse> = state
        .tasks
        .list_tasks_of_project(parse_project_id(&project_id)?)
        .await?
        .iter()
        .map(TaskResponse::from)
        .collect();
    Ok(Json(TaskListResponse {
        total: tasks.len(),
        tasks,
    }))
}

/// GET /projects/{id}/tasks/{task_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state
        .tasks
        .get_task(parse_project_id(&project_id)?, parse_task_id(&task_id)?)
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// PUT /projects/{id}/tasks/{task_id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
    JsonBody(body): JsonBody<UpdateTaskBody>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state
        .tasks
        .edit_task(
            parse_project_id(&project_id)?,
            parse_task_id(&task_id)?,
            body.into(),
        )
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// PATCH /projects/{id}/tasks/{task_id}/status
///
/// Only the status changes; other fields are neither touched nor
/// revalidated.
pub async fn change_status(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
    JsonBody(body): JsonBody<ChangeStatusBody>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state
        .tasks
        .change_status(
            parse_project_id(&project_id)?,
            parse_task_id(&task_id)?,
            &body.status,
        )
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// DELETE /projects/{id}/tasks/{task_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state
        .tasks
        .delete_task(parse_project_id(&project_id)?, parse_task_id(&task_id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
