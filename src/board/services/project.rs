//! Service layer for project creation, lookup, editing and deletion.

use super::{BoardLimits, BoardServiceError, BoardServiceResult, CappedResource};
use crate::board::{
    domain::{Project, ProjectId, ProjectName, ProjectPatch},
    ports::{BoardRepositoryError, ProjectRepository},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for a partial project update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditProjectRequest {
    name: Option<String>,
    description: Option<String>,
}

impl EditProjectRequest {
    /// Creates an empty edit request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the project name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Project orchestration service enforcing the project cap.
pub struct ProjectService<R, C>
where
    R: ProjectRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    limits: BoardLimits,
}

impl<R, C> Clone for ProjectService<R, C>
where
    R: ProjectRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            limits: self.limits,
        }
    }
}

impl<R, C> ProjectService<R, C>
where
    R: ProjectRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, limits: BoardLimits) -> Self {
        Self {
            repository,
            clock,
            limits,
        }
    }

    /// Creates a project after checking the project cap.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::CapExceeded`] when the cap is reached,
    /// [`BoardServiceError::Domain`] when validation fails, or
    /// [`BoardServiceError::Repository`] when the name is taken or
    /// persistence fails.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> BoardServiceResult<Project> {
        let limit = self.limits.max_projects();
        let existing = self.repository.count_projects().await?;
        if existing >= limit {
            warn!(limit, "project cap reached, rejecting creation");
            return Err(BoardServiceError::CapExceeded {
                resource: CappedResource::Projects,
                limit,
            });
        }

        let project = Project::create(&request.name, &request.description, &*self.clock)?;
        self.repository.add_project(&project).await?;
        info!(project_id = %project.id(), name = %project.name(), "project created");
        Ok(project)
    }

    /// Returns a project with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::ProjectNotFound`] (wrapped) when the id
    /// is unknown, or a repository error when lookup fails.
    pub async fn get_project(&self, id: ProjectId) -> BoardServiceResult<Project> {
        self.repository
            .find_project_by_id(id)
            .await?
            .ok_or_else(|| BoardRepositoryError::ProjectNotFound(id).into())
    }

    /// Finds a project by name.
    ///
    /// Returns `Ok(None)` when no project has the name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the name is not a valid
    /// project name, or [`BoardServiceError::Repository`] when lookup fails.
    pub async fn get_project_by_name(&self, name: &str) -> BoardServiceResult<Option<Project>> {
        let project_name = ProjectName::new(name)?;
        Ok(self.repository.find_project_by_name(&project_name).await?)
    }

    /// Returns every project ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when lookup fails.
    pub async fn list_projects(&self) -> BoardServiceResult<Vec<Project>> {
        Ok(self.repository.list_projects().await?)
    }

    /// Applies a partial update to an existing project.
    ///
    /// Existence is checked before the new values are validated.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error for unknown ids,
    /// [`BoardServiceError::Domain`] for invalid values, or a duplicate-name
    /// repository error when the new name is taken.
    pub async fn edit_project(
        &self,
        id: ProjectId,
        request: EditProjectRequest,
    ) -> BoardServiceResult<Project> {
        self.get_project(id).await?;
        let patch = ProjectPatch::new(request.name.as_deref(), request.description.as_deref())?;
        let project = self.repository.update_project(id, &patch).await?;
        info!(project_id = %id, "project updated");
        Ok(project)
    }

    /// Deletes a project and, by cascade, all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns a not-found repository error when the id is unknown.
    pub async fn delete_project(&self, id: ProjectId) -> BoardServiceResult<()> {
        if !self.repository.delete_project(id).await? {
            return Err(BoardRepositoryError::ProjectNotFound(id).into());
        }
        info!(project_id = %id, "project deleted");
        Ok(())
    }
}
