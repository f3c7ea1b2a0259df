//! Project aggregate and its partial-update patch.

use super::{BoardDomainError, Description, ProjectId, ProjectName, Task, TaskId};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated partial update for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    /// New name, if changing.
    pub name: Option<ProjectName>,
    /// New description, if changing.
    pub description: Option<Description>,
}

impl ProjectPatch {
    /// Validates raw replacement values.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] when a provided value breaks its word
    /// limit.
    pub fn new(name: Option<&str>, description: Option<&str>) -> Result<Self, BoardDomainError> {
        Ok(Self {
            name: name.map(ProjectName::new).transpose()?,
            description: description.map(Description::new).transpose()?,
        })
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// A named container that owns an ordered list of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    description: Description,
    created_at: DateTime<Utc>,
    tasks: Vec<Task>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: ProjectName,
    /// Persisted description.
    pub description: Description,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Owned tasks in creation order.
    pub tasks: Vec<Task>,
}

impl Project {
    /// Creates a project from already validated values.
    #[must_use]
    pub fn new(name: ProjectName, description: Description, clock: &impl Clock) -> Self {
        Self {
            id: ProjectId::new(),
            name,
            description,
            created_at: clock.utc().trunc_subsecs(6),
            tasks: Vec::new(),
        }
    }

    /// Validates raw input and creates a project with no tasks.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] when the name is empty or either field
    /// exceeds its word limit.
    pub fn create(
        name: &str,
        description: &str,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let project_name = ProjectName::new(name)?;
        let project_description = Description::new(description)?;
        Ok(Self::new(project_name, project_description, clock))
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            created_at: data.created_at,
            tasks: data.tasks,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the owned tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Validates and applies new values for name and description.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] when any provided value is invalid. The
    /// project is unchanged on error.
    pub fn edit(
        &mut self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), BoardDomainError> {
        let patch = ProjectPatch::new(name, description)?;
        self.apply(&patch);
        Ok(())
    }

    /// Applies an already validated patch.
    pub fn apply(&mut self, patch: &ProjectPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
    }

    /// Appends a task to the project's list.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes a task by identifier and reports whether one was removed.
    pub fn remove_task(&mut self, task_id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != task_id);
        self.tasks.len() != before
    }
}
