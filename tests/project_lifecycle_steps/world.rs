//! Shared world state for project lifecycle BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, Utc};
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Project, Task},
    services::{AutocloseService, BoardLimits, BoardServiceError, ProjectService, TaskService},
};

/// Project service type used by the BDD world.
pub type TestProjectService = ProjectService<InMemoryBoardRepository, DefaultClock>;

/// Task service type used by the BDD world.
pub type TestTaskService =
    TaskService<InMemoryBoardRepository, InMemoryBoardRepository, DefaultClock>;

/// Clock shifted into the past, used to seed tasks whose deadline has
/// already passed.
pub struct PastClock(pub Duration);

impl Clock for PastClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc::now() - self.0
    }
}

/// Scenario world for project lifecycle behaviour tests.
pub struct ProjectLifecycleWorld {
    pub repository: Arc<InMemoryBoardRepository>,
    pub projects: TestProjectService,
    pub tasks: TestTaskService,
    pub current_project: Option<Project>,
    pub last_task: Option<Task>,
    pub last_error: Option<BoardServiceError>,
    pub closed_count: Option<usize>,
}

impl ProjectLifecycleWorld {
    /// Creates a world over an empty store with the given caps.
    #[must_use]
    pub fn with_limits(limits: BoardLimits) -> Self {
        let repository = Arc::new(InMemoryBoardRepository::new());
        let clock = Arc::new(DefaultClock);
        Self {
            projects: ProjectService::new(Arc::clone(&repository), Arc::clone(&clock), limits),
            tasks: TaskService::new(
                Arc::clone(&repository),
                Arc::clone(&repository),
                clock,
                limits,
            ),
            repository,
            current_project: None,
            last_task: None,
            last_error: None,
            closed_count: None,
        }
    }

    /// Returns an autoclose job over the world's store.
    #[must_use]
    pub fn autoclose(&self) -> AutocloseService<InMemoryBoardRepository, DefaultClock> {
        AutocloseService::new(Arc::clone(&self.repository), Arc::new(DefaultClock))
    }

    /// Returns the project created by an earlier step.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.current_project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the task created or updated by an earlier step.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for ProjectLifecycleWorld {
    fn default() -> Self {
        Self::with_limits(BoardLimits::default())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectLifecycleWorld {
    ProjectLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
