//! Repository ports for project and task persistence.

use crate::board::domain::{
    Project, ProjectId, ProjectName, ProjectPatch, Task, TaskId, TaskPatch, TaskStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateProjectName`] when another
    /// project already uses the name, or
    /// [`BoardRepositoryError::DuplicateProject`] when the identifier exists.
    async fn add_project(&self, project: &Project) -> BoardRepositoryResult<()>;

    /// Finds a project, with its tasks, by identifier.
    async fn find_project_by_id(&self, id: ProjectId) -> BoardRepositoryResult<Option<Project>>;

    /// Finds a project, with its tasks, by exact name.
    async fn find_project_by_name(
        &self,
        name: &ProjectName,
    ) -> BoardRepositoryResult<Option<Project>>;

    /// Returns every project ordered by ascending creation time.
    ///
    /// Projects created at the same instant keep their insertion order.
    async fn list_projects(&self) -> BoardRepositoryResult<Vec<Project>>;

    /// Returns the number of stored projects.
    async fn count_projects(&self) -> BoardRepositoryResult<usize>;

    /// Applies a validated patch and returns the updated project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::ProjectNotFound`] for an unknown id or
    /// [`BoardRepositoryError::DuplicateProjectName`] when the new name
    /// belongs to a different project.
    async fn update_project(
        &self,
        id: ProjectId,
        patch: &ProjectPatch,
    ) -> BoardRepositoryResult<Project>;

    /// Deletes a project and all of its tasks.
    ///
    /// Returns `false` when no project had the identifier.
    async fn delete_project(&self, id: ProjectId) -> BoardRepositoryResult<bool>;
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task under its owning project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::ProjectNotFound`] when the owning
    /// project does not exist.
    async fn add_task(&self, task: &Task) -> BoardRepositoryResult<()>;

    /// Finds a task by identifier.
    async fn find_task_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>>;

    /// Returns the tasks of a project in creation order, with insertion
    /// order breaking ties.
    ///
    /// Unknown projects yield an empty list.
    async fn list_tasks_of_project(&self, project_id: ProjectId)
    -> BoardRepositoryResult<Vec<Task>>;

    /// Returns the number of tasks across all projects.
    async fn count_tasks(&self) -> BoardRepositoryResult<usize>;

    /// Applies a validated patch and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::TaskNotFound`] for an unknown id.
    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> BoardRepositoryResult<Task>;

    /// Sets only the status of a task and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::TaskNotFound`] for an unknown id.
    async fn change_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> BoardRepositoryResult<Task>;

    /// Deletes a task. Returns `false` when no task had the identifier.
    async fn delete_task(&self, id: TaskId) -> BoardRepositoryResult<bool>;

    /// Marks every task with a deadline before `today` that is not done as
    /// done, stamping `closed_at` with `now`.
    ///
    /// Returns the number of tasks closed.
    async fn close_overdue_tasks(
        &self,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> BoardRepositoryResult<usize>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// Another project already uses this name.
    #[error("project name already exists: {0}")]
    DuplicateProjectName(ProjectName),

    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The project was not found.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Stored data no longer satisfies domain rules.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps an error raised while rebuilding domain values from storage.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }
}
