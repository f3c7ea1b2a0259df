//! `PostgreSQL` repository shared plumbing: pool, blocking execution and row
//! conversion.

use super::{
    models::{ProjectRow, TaskRow},
    schema::{projects, tasks},
};
use crate::board::{
    domain::{
        Description, PersistedProjectData, PersistedTaskData, Project, ProjectId, ProjectName,
        Task, TaskId, TaskStatus, TaskTitle,
    },
    ports::{BoardRepositoryError, BoardRepositoryResult},
};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use std::collections::HashMap;

/// `PostgreSQL` connection pool type used by the board adapter.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`BoardRepositoryError::Persistence`] when the pool cannot open
/// its initial connections.
pub fn build_pool(database_url: &str, max_size: u32) -> BoardRepositoryResult<BoardPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(BoardRepositoryError::persistence)
}

/// `PostgreSQL`-backed project and task repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    /// Applies the board schema using a pooled connection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the migration SQL
    /// fails or no connection is available.
    pub async fn migrate(&self) -> BoardRepositoryResult<()> {
        self.run_blocking(super::migrations::run_migrations).await
    }

    pub(super) async fn run_blocking<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardRepositoryError::persistence)?
    }

    /// Runs `f` inside a single database transaction.
    pub(super) async fn run_in_transaction<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        self.run_blocking(move |connection| connection.transaction(f))
            .await
    }
}

impl From<DieselError> for BoardRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

pub(super) fn to_count(value: i64) -> BoardRepositoryResult<usize> {
    usize::try_from(value).map_err(BoardRepositoryError::persistence)
}

pub(super) fn row_to_task(row: TaskRow) -> BoardRepositoryResult<Task> {
    let TaskRow {
        id,
        project_id,
        title,
        description,
        status,
        deadline,
        created_at,
        closed_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        project_id: ProjectId::from_uuid(project_id),
        title: TaskTitle::new(title).map_err(BoardRepositoryError::invalid_persisted_data)?,
        description: Description::new(description)
            .map_err(BoardRepositoryError::invalid_persisted_data)?,
        status: TaskStatus::try_from(status.as_str())
            .map_err(BoardRepositoryError::invalid_persisted_data)?,
        deadline,
        created_at,
        closed_at,
    };
    Ok(Task::from_persisted(data))
}

pub(super) fn row_to_project(row: ProjectRow, tasks: Vec<Task>) -> BoardRepositoryResult<Project> {
    let data = PersistedProjectData {
        id: ProjectId::from_uuid(row.id),
        name: ProjectName::new(row.name).map_err(BoardRepositoryError::invalid_persisted_data)?,
        description: Description::new(row.description)
            .map_err(BoardRepositoryError::invalid_persisted_data)?,
        created_at: row.created_at,
        tasks,
    };
    Ok(Project::from_persisted(data))
}

pub(super) fn load_tasks_of(
    connection: &mut PgConnection,
    project_id: ProjectId,
) -> BoardRepositoryResult<Vec<Task>> {
    tasks::table
        .filter(tasks::project_id.eq(project_id.into_inner()))
        .order((tasks::created_at.asc(), tasks::seq.asc()))
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)?
        .into_iter()
        .map(row_to_task)
        .collect()
}

/// Attaches tasks to each project row with one query for all tasks.
pub(super) fn assemble_projects(
    connection: &mut PgConnection,
    rows: Vec<ProjectRow>,
) -> BoardRepositoryResult<Vec<Project>> {
    let ids: Vec<uuid::Uuid> = rows.iter().map(|row| row.id).collect();
    let task_rows = tasks::table
        .filter(tasks::project_id.eq_any(ids))
        .order((tasks::created_at.asc(), tasks::seq.asc()))
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)?;

    let mut grouped: HashMap<uuid::Uuid, Vec<Task>> = HashMap::new();
    for task_row in task_rows {
        let owner = task_row.project_id;
        grouped.entry(owner).or_default().push(row_to_task(task_row)?);
    }

    rows.into_iter()
        .map(|row| {
            let owned = grouped.remove(&row.id).unwrap_or_default();
            row_to_project(row, owned)
        })
        .collect()
}

pub(super) fn find_project_row(
    connection: &mut PgConnection,
    id: ProjectId,
) -> BoardRepositoryResult<Option<ProjectRow>> {
    Ok(projects::table
        .find(id.into_inner())
        .select(ProjectRow::as_select())
        .first::<ProjectRow>(connection)
        .optional()?)
}

pub(super) fn find_task_row(
    connection: &mut PgConnection,
    id: TaskId,
) -> BoardRepositoryResult<Option<TaskRow>> {
    Ok(tasks::table
        .find(id.into_inner())
        .select(TaskRow::as_select())
        .first::<TaskRow>(connection)
        .optional()?)
}
