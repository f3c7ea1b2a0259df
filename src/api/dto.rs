//! Request and response bodies for the HTTP surface.

use crate::board::domain::{Project, Task, TaskChanges};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /projects`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectBody {
    /// Project name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /projects/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectBody {
    /// Replacement name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /projects/{id}/tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional `YYYY-MM-DD` deadline.
    #[serde(default)]
    pub deadline: Option<String>,
    /// Optional initial status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `PUT /projects/{id}/tasks/{task_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<String>,
    /// Replacement `YYYY-MM-DD` deadline.
    #[serde(default)]
    pub deadline: Option<String>,
}

impl From<UpdateTaskBody> for TaskChanges {
    fn from(body: UpdateTaskBody) -> Self {
        let mut changes = Self::new();
        if let Some(title) = body.title {
            changes = changes.with_title(title);
        }
        if let Some(description) = body.description {
            changes = changes.with_description(description);
        }
        if let Some(status) = body.status {
            changes = changes.with_status(status);
        }
        if let Some(deadline) = body.deadline {
            changes = changes.with_deadline(deadline);
        }
        changes
    }
}

/// Body of `PATCH /projects/{id}/tasks/{task_id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeStatusBody {
    /// New status.
    pub status: String,
}

/// Project representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResponse {
    /// Project identifier.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Number of owned tasks.
    pub task_count: usize,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            name: project.name().as_str().to_owned(),
            description: project.description().as_str().to_owned(),
            created_at: project.created_at(),
            task_count: project.tasks().len(),
        }
    }
}

/// Response of `GET /projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    /// Projects by ascending creation time.
    pub projects: Vec<ProjectResponse>,
    /// Number of projects returned.
    pub total: usize,
}

/// Task representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: String,
    /// Owning project identifier.
    pub project_id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Status (`todo`, `doing` or `done`).
    pub status: String,
    /// Deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Autoclose timestamp, if the task was auto-closed.
    pub closed_at: Option<DateTime<Utc>>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            project_id: task.project_id().to_string(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status().as_str().to_owned(),
            deadline: task.deadline(),
            created_at: task.created_at(),
            closed_at: task.closed_at(),
        }
    }
}

/// Response of `GET /projects/{id}/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// Tasks in creation order.
    pub tasks: Vec<TaskResponse>,
    /// Number of tasks returned.
    pub total: usize,
}

/// Response of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Human-readable greeting.
    pub message: String,
}
