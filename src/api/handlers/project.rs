//! Handlers for the `/projects` resource.

use crate::api::{
    dto::{CreateProjectBody, ProjectListResponse, ProjectResponse, UpdateProjectBody},
    error::ApiResult,
    extract::{JsonBody, parse_project_id},
    state::AppState,
};
use crate::board::services::{CreateProjectRequest, EditProjectRequest};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateProjectBody>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let mut request = CreateProjectRequest::new(body.name);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    let project = state.projects.create_project(request).await?;
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&project))))
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let projects: Vec<ProjectResponse> = state
        .projects
        .list_projects()
        .await?
        .iter()
        .map(ProjectResponse::from)
        .collect();
    Ok(Json(ProjectListResponse {
        total: projects.len(),
        projects,
    }))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state.projects.get_project(parse_project_id(&id)?).await?;
    Ok(Json(ProjectResponse::from(&project)))
}

/// PUT /projects/{id}
///
/// Unknown projects are reported before the body is validated.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateProjectBody>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = parse_project_id(&id)?;
    let mut request = EditProjectRequest::new();
    if let Some(name) = body.name {
        request = request.with_name(name);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    let project = state.projects.edit_project(project_id, request).await?;
    Ok(Json(ProjectResponse::from(&project)))
}

/// DELETE /projects/{id}
///
/// Cascades to every task of the project.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.projects.delete_project(parse_project_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
