//! [`TaskRepository`] for the in-memory store.

use super::InMemoryBoardRepository;
use crate::board::{
    domain::{ProjectId, Task, TaskId, TaskPatch, TaskStatus},
    ports::{BoardRepositoryError, BoardRepositoryResult, TaskRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[async_trait]
impl TaskRepository for InMemoryBoardRepository {
    async fn add_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.projects.contains_key(&task.project_id()) {
            return Err(BoardRepositoryError::ProjectNotFound(task.project_id()));
        }
        if state.tasks.contains_key(&task.id()) {
            return Err(BoardRepositoryError::DuplicateTask(task.id()));
        }

        state.task_order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_task_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_tasks_of_project(
        &self,
        project_id: ProjectId,
    ) -> BoardRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks_of(project_id))
    }

    async fn count_tasks(&self) -> BoardRepositoryResult<usize> {
        let state = self.read()?;
        Ok(state.tasks.len())
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> BoardRepositoryResult<Task> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(BoardRepositoryError::TaskNotFound(id))?;
        task.apply(patch);
        Ok(task.clone())
    }

    async fn change_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> BoardRepositoryResult<Task> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(BoardRepositoryError::TaskNotFound(id))?;
        task.change_status(status);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: TaskId) -> BoardRepositoryResult<bool> {
        let mut state = self.write()?;
        if state.tasks.remove(&id).is_none() {
            return Ok(false);
        }
        state.task_order.retain(|task_id| *task_id != id);
        Ok(true)
    }

    async fn close_overdue_tasks(
        &self,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> BoardRepositoryResult<usize> {
        let mut state = self.write()?;
        let mut closed = 0;
        for task in state.tasks.values_mut() {
            if task.is_overdue(today) {
                task.close_overdue(now);
                closed += 1;
            }
        }
        Ok(closed)
    }
}
