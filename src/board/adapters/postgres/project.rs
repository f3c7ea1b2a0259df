//! [`ProjectRepository`] for `PostgreSQL`.

use super::{
    models::{NewProjectRow, ProjectChangeset, ProjectRow},
    repository::{
        PostgresBoardRepository, assemble_projects, find_project_row, load_tasks_of,
        row_to_project, to_count,
    },
    schema::projects,
};
use crate::board::{
    domain::{Project, ProjectId, ProjectName, ProjectPatch},
    ports::{BoardRepositoryError, BoardRepositoryResult, ProjectRepository},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

const PROJECT_NAME_CONSTRAINT: &str = "uq_projects_name";

#[async_trait]
impl ProjectRepository for PostgresBoardRepository {
    async fn add_project(&self, project: &Project) -> BoardRepositoryResult<()> {
        let project_id = project.id();
        let name = project.name().clone();
        let new_row = NewProjectRow {
            id: project_id.into_inner(),
            name: name.as_str().to_owned(),
            description: project.description().as_str().to_owned(),
            created_at: project.created_at(),
        };

        self.run_in_transaction(move |connection| {
            diesel::insert_into(projects::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_project_write_error(err, &name, Some(project_id)))?;
            Ok(())
        })
        .await
    }

    async fn find_project_by_id(&self, id: ProjectId) -> BoardRepositoryResult<Option<Project>> {
        self.run_in_transaction(move |connection| {
            let Some(row) = find_project_row(connection, id)? else {
                return Ok(None);
            };
            let tasks = load_tasks_of(connection, id)?;
            row_to_project(row, tasks).map(Some)
        })
        .await
    }

    async fn find_project_by_name(
        &self,
        name: &ProjectName,
    ) -> BoardRepositoryResult<Option<Project>> {
        let lookup = name.as_str().to_owned();
        self.run_in_transaction(move |connection| {
            let found = projects::table
                .filter(projects::name.eq(lookup))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()?;
            let Some(row) = found else {
                return Ok(None);
            };
            let tasks = load_tasks_of(connection, ProjectId::from_uuid(row.id))?;
            row_to_project(row, tasks).map(Some)
        })
        .await
    }

    async fn list_projects(&self) -> BoardRepositoryResult<Vec<Project>> {
        self.run_in_transaction(|connection| {
            let rows = projects::table
                .order((projects::created_at.asc(), projects::seq.asc()))
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)?;
            assemble_projects(connection, rows)
        })
        .await
    }

    async fn count_projects(&self) -> BoardRepositoryResult<usize> {
        self.run_blocking(|connection| {
            let total = projects::table.count().get_result::<i64>(connection)?;
            to_count(total)
        })
        .await
    }

    async fn update_project(
        &self,
        id: ProjectId,
        patch: &ProjectPatch,
    ) -> BoardRepositoryResult<Project> {
        let new_name = patch.name.clone();
        let changeset = ProjectChangeset {
            name: patch.name.as_ref().map(|name| name.as_str().to_owned()),
            description: patch
                .description
                .as_ref()
                .map(|description| description.as_str().to_owned()),
        };
        let has_changes = !patch.is_empty();

        self.run_in_transaction(move |connection| {
            if find_project_row(connection, id)?.is_none() {
                return Err(BoardRepositoryError::ProjectNotFound(id));
            }
            if let Some(name) = &new_name {
                ensure_name_free(connection, name, id)?;
            }

            if has_changes {
                diesel::update(projects::table.find(id.into_inner()))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(|err| match &new_name {
                        Some(name) => map_project_write_error(err, name, None),
                        None => BoardRepositoryError::persistence(err),
                    })?;
            }

            let row = find_project_row(connection, id)?
                .ok_or(BoardRepositoryError::ProjectNotFound(id))?;
            let tasks = load_tasks_of(connection, id)?;
            row_to_project(row, tasks)
        })
        .await
    }

    async fn delete_project(&self, id: ProjectId) -> BoardRepositoryResult<bool> {
        self.run_in_transaction(move |connection| {
            let deleted =
                diesel::delete(projects::table.find(id.into_inner())).execute(connection)?;
            Ok(deleted > 0)
        })
        .await
    }
}

fn ensure_name_free(
    connection: &mut PgConnection,
    name: &ProjectName,
    id: ProjectId,
) -> BoardRepositoryResult<()> {
    let owner = projects::table
        .filter(projects::name.eq(name.as_str()))
        .select(projects::id)
        .first::<uuid::Uuid>(connection)
        .optional()?;
    match owner {
        Some(other) if other != id.into_inner() => {
            Err(BoardRepositoryError::DuplicateProjectName(name.clone()))
        }
        _ => Ok(()),
    }
}

fn map_project_write_error(
    err: DieselError,
    name: &ProjectName,
    inserted_id: Option<ProjectId>,
) -> BoardRepositoryError {
    match (err, inserted_id) {
        (DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info), _)
            if is_name_violation(info.as_ref()) =>
        {
            BoardRepositoryError::DuplicateProjectName(name.clone())
        }
        (DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _), Some(id)) => {
            BoardRepositoryError::DuplicateProject(id)
        }
        (other, _) => BoardRepositoryError::persistence(other),
    }
}

fn is_name_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|constraint| constraint == PROJECT_NAME_CONSTRAINT)
}
