//! Orchestration services for projects, tasks and the autoclose job.

mod autoclose;
mod error;
mod limits;
mod project;
mod task;

pub use autoclose::AutocloseService;
pub use error::{BoardErrorKind, BoardServiceError, BoardServiceResult, CappedResource};
pub use limits::{BoardLimits, DEFAULT_MAX_PROJECTS, DEFAULT_MAX_TASKS};
pub use project::{CreateProjectRequest, EditProjectRequest, ProjectService};
pub use task::TaskService;
