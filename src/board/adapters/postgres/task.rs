//! [`TaskRepository`] for `PostgreSQL`.

use super::{
    models::{NewTaskRow, TaskChangeset},
    repository::{
        PostgresBoardRepository, find_project_row, find_task_row, load_tasks_of, row_to_task,
        to_count,
    },
    schema::tasks,
};
use crate::board::{
    domain::{ProjectId, Task, TaskId, TaskPatch, TaskStatus},
    ports::{BoardRepositoryError, BoardRepositoryResult, TaskRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

#[async_trait]
impl TaskRepository for PostgresBoardRepository {
    async fn add_task(&self, task: &Task) -> BoardRepositoryResult<()> {
        let task_id = task.id();
        let project_id = task.project_id();
        let new_row = NewTaskRow {
            id: task_id.into_inner(),
            project_id: project_id.into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status().as_str().to_owned(),
            deadline: task.deadline(),
            created_at: task.created_at(),
            closed_at: task.closed_at(),
        };

        self.run_in_transaction(move |connection| {
            if find_project_row(connection, project_id)?.is_none() {
                return Err(BoardRepositoryError::ProjectNotFound(project_id));
            }

            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateTask(task_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        BoardRepositoryError::ProjectNotFound(project_id)
                    }
                    other => BoardRepositoryError::persistence(other),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_task_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            find_task_row(connection, id)?
                .map(row_to_task)
                .transpose()
        })
        .await
    }

    async fn list_tasks_of_project(
        &self,
        project_id: ProjectId,
    ) -> BoardRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| load_tasks_of(connection, project_id))
            .await
    }

    async fn count_tasks(&self) -> BoardRepositoryResult<usize> {
        self.run_blocking(|connection| {
            let total = tasks::table.count().get_result::<i64>(connection)?;
            to_count(total)
        })
        .await
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> BoardRepositoryResult<Task> {
        let changeset = TaskChangeset {
            title: patch.title.as_ref().map(|title| title.as_str().to_owned()),
            description: patch
                .description
                .as_ref()
                .map(|description| description.as_str().to_owned()),
            status: patch.status.map(|status| status.as_str().to_owned()),
            deadline: patch.deadline,
        };
        let has_changes = !patch.is_empty();

        self.run_in_transaction(move |connection| {
            if find_task_row(connection, id)?.is_none() {
                return Err(BoardRepositoryError::TaskNotFound(id));
            }
            if has_changes {
                diesel::update(tasks::table.find(id.into_inner()))
                    .set(&changeset)
                    .execute(connection)?;
            }
            reload_task(connection, id)
        })
        .await
    }

    async fn change_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> BoardRepositoryResult<Task> {
        self.run_in_transaction(move |connection| {
            let updated = diesel::update(tasks::table.find(id.into_inner()))
                .set(tasks::status.eq(status.as_str()))
                .execute(connection)?;
            if updated == 0 {
                return Err(BoardRepositoryError::TaskNotFound(id));
            }
            reload_task(connection, id)
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> BoardRepositoryResult<bool> {
        self.run_in_transaction(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.into_inner())).execute(connection)?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn close_overdue_tasks(
        &self,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> BoardRepositoryResult<usize> {
        self.run_in_transaction(move |connection| {
            let closed = diesel::update(
                tasks::table
                    .filter(tasks::deadline.is_not_null())
                    .filter(tasks::deadline.lt(today))
                    .filter(tasks::status.ne(TaskStatus::Done.as_str())),
            )
            .set((
                tasks::status.eq(TaskStatus::Done.as_str()),
                tasks::closed_at.eq(now),
            ))
            .execute(connection)?;
            Ok(closed)
        })
        .await
    }
}

fn reload_task(
    connection: &mut diesel::pg::PgConnection,
    id: TaskId,
) -> BoardRepositoryResult<Task> {
    find_task_row(connection, id)?
        .map(row_to_task)
        .transpose()?
        .ok_or(BoardRepositoryError::TaskNotFound(id))
}
