//! Service layer for tasks addressed through their owning project.

use super::{BoardLimits, BoardServiceError, BoardServiceResult, CappedResource};
use crate::board::{
    domain::{
        BoardDomainError, NewTask, ProjectId, Task, TaskChanges, TaskId, TaskPatch, TaskStatus,
    },
    ports::{BoardRepositoryError, ProjectRepository, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Task orchestration service enforcing the task cap and project ownership.
pub struct TaskService<P, T, C>
where
    P: ProjectRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    clock: Arc<C>,
    limits: BoardLimits,
}

impl<P, T, C> Clone for TaskService<P, T, C>
where
    P: ProjectRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
            limits: self.limits,
        }
    }
}

impl<P, T, C> TaskService<P, T, C>
where
    P: ProjectRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, clock: Arc<C>, limits: BoardLimits) -> Self {
        Self {
            projects,
            tasks,
            clock,
            limits,
        }
    }

    /// Creates a task in `project_id` after checking the global task cap.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::CapExceeded`] when the cap is reached, a
    /// not-found repository error when the project does not exist, or
    /// [`BoardServiceError::Domain`] when validation fails.
    pub async fn create_task(
        &self,
        project_id: ProjectId,
        input: NewTask,
    ) -> BoardServiceResult<Task> {
        let limit = self.limits.max_tasks();
        let existing = self.tasks.count_tasks().await?;
        if existing >= limit {
            warn!(limit, "task cap reached, rejecting creation");
            return Err(BoardServiceError::CapExceeded {
                resource: CappedResource::Tasks,
                limit,
            });
        }
        self.ensure_project_exists(project_id).await?;

        let task = Task::create(project_id, input, &*self.clock)?;
        self.tasks.add_task(&task).await?;
        info!(task_id = %task.id(), project_id = %project_id, "task created");
        Ok(task)
    }

    /// Returns the tasks of a project in creation order.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error when the project does not exist.
    pub async fn list_tasks_of_project(
        &self,
        project_id: ProjectId,
    ) -> BoardServiceResult<Vec<Task>> {
        self.ensure_project_exists(project_id).await?;
        Ok(self.tasks.list_tasks_of_project(project_id).await?)
    }

    /// Returns a task that belongs to `project_id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error when the project or task does not
    /// exist, or the task belongs to another project.
    pub async fn get_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> BoardServiceResult<Task> {
        self.ensure_project_exists(project_id).await?;
        self.find_owned_task(project_id, task_id).await
    }

    /// Applies a partial update to a task of `project_id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error for unknown or foreign tasks, or
    /// [`BoardServiceError::Domain`] when a provided value is invalid.
    pub async fn edit_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        changes: TaskChanges,
    ) -> BoardServiceResult<Task> {
        self.get_task(project_id, task_id).await?;
        let today = self.clock.utc().date_naive();
        let patch = TaskPatch::new(changes, today)?;
        let task = self.tasks.update_task(task_id, &patch).await?;
        info!(task_id = %task_id, "task updated");
        Ok(task)
    }

    /// Changes only the status of a task of `project_id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error for unknown or foreign tasks, or
    /// [`BoardServiceError::Domain`] when the status is not recognised.
    pub async fn change_status(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        status: &str,
    ) -> BoardServiceResult<Task> {
        self.get_task(project_id, task_id).await?;
        let new_status = TaskStatus::try_from(status).map_err(BoardDomainError::from)?;
        let task = self.tasks.change_task_status(task_id, new_status).await?;
        info!(task_id = %task_id, status = %new_status, "task status changed");
        Ok(task)
    }

    /// Deletes a task of `project_id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error for unknown or foreign tasks.
    pub async fn delete_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> BoardServiceResult<()> {
        self.get_task(project_id, task_id).await?;
        if !self.tasks.delete_task(task_id).await? {
            return Err(BoardRepositoryError::TaskNotFound(task_id).into());
        }
        info!(task_id = %task_id, "task deleted");
        Ok(())
    }

    async fn ensure_project_exists(&self, project_id: ProjectId) -> BoardServiceResult<()> {
        match self.projects.find_project_by_id(project_id).await? {
            Some(_) => Ok(()),
            None => Err(BoardRepositoryError::ProjectNotFound(project_id).into()),
        }
    }

    async fn find_owned_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> BoardServiceResult<Task> {
        self.tasks
            .find_task_by_id(task_id)
            .await?
            .filter(|task| task.project_id() == project_id)
            .ok_or_else(|| BoardRepositoryError::TaskNotFound(task_id).into())
    }
}
