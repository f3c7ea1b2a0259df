//! Shared handler state.

use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    ports::{ProjectRepository, TaskRepository},
    services::{AutocloseService, BoardLimits, ProjectService, TaskService},
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Project service over any repository implementation.
pub type DynProjectService = ProjectService<dyn ProjectRepository, DefaultClock>;

/// Task service over any repository implementation.
pub type DynTaskService = TaskService<dyn ProjectRepository, dyn TaskRepository, DefaultClock>;

/// Autoclose job over any repository implementation.
pub type DynAutocloseService = AutocloseService<dyn TaskRepository, DefaultClock>;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheap to clone; services sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Project operations.
    pub projects: Arc<DynProjectService>,
    /// Task operations.
    pub tasks: Arc<DynTaskService>,
    task_repository: Arc<dyn TaskRepository>,
    clock: Arc<DefaultClock>,
}

impl AppState {
    /// Builds services over the given repositories.
    #[must_use]
    pub fn new(
        project_repository: Arc<dyn ProjectRepository>,
        task_repository: Arc<dyn TaskRepository>,
        limits: BoardLimits,
    ) -> Self {
        let clock = Arc::new(DefaultClock);
        let projects =
            ProjectService::new(Arc::clone(&project_repository), Arc::clone(&clock), limits);
        let tasks = TaskService::new(
            project_repository,
            Arc::clone(&task_repository),
            Arc::clone(&clock),
            limits,
        );
        Self {
            projects: Arc::new(projects),
            tasks: Arc::new(tasks),
            task_repository,
            clock,
        }
    }

    /// Builds services over a fresh in-memory store.
    #[must_use]
    pub fn in_memory(limits: BoardLimits) -> Self {
        let repository = Arc::new(InMemoryBoardRepository::new());
        let project_repository: Arc<dyn ProjectRepository> = repository.clone();
        Self::new(project_repository, repository, limits)
    }

    /// Returns an autoclose service sharing this state's task repository.
    #[must_use]
    pub fn autoclose(&self) -> DynAutocloseService {
        AutocloseService::new(Arc::clone(&self.task_repository), Arc::clone(&self.clock))
    }
}
