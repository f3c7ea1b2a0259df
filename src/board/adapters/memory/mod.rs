//! In-memory repository for board tests and memory-backed deployments.
//!
//! A single store backs both repository traits so that deleting a project
//! also removes its tasks.

mod project;
mod task;

use crate::board::{
    domain::{PersistedProjectData, Project, ProjectId, ProjectName, Task, TaskId},
    ports::{BoardRepositoryError, BoardRepositoryResult},
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory project and task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
}

/// Projects are stored without their task lists; tasks are kept in their own
/// map and attached on read. The order vectors record insertion order, which
/// breaks ties between equal creation timestamps.
#[derive(Debug, Default)]
struct InMemoryBoardState {
    projects: HashMap<ProjectId, Project>,
    name_index: HashMap<ProjectName, ProjectId>,
    project_order: Vec<ProjectId>,
    tasks: HashMap<TaskId, Task>,
    task_order: Vec<TaskId>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> BoardRepositoryResult<RwLockReadGuard<'_, InMemoryBoardState>> {
        self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> BoardRepositoryResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl InMemoryBoardState {
    fn tasks_of(&self, project_id: ProjectId) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .task_order
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect();
        tasks.sort_by_key(Task::created_at);
        tasks
    }

    fn assemble(&self, project_id: ProjectId) -> Option<Project> {
        let project = self.projects.get(&project_id)?;
        Some(with_tasks(project, self.tasks_of(project_id)))
    }

    fn ordered_projects(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self
            .project_order
            .iter()
            .filter_map(|id| self.assemble(*id))
            .collect();
        projects.sort_by_key(Project::created_at);
        projects
    }
}

fn with_tasks(project: &Project, tasks: Vec<Task>) -> Project {
    Project::from_persisted(PersistedProjectData {
        id: project.id(),
        name: project.name().clone(),
        description: project.description().clone(),
        created_at: project.created_at(),
        tasks,
    })
}
