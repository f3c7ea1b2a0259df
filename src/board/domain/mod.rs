//! Domain model for projects and their tasks.
//!
//! Values are validated on construction so that services and repositories
//! only ever handle well-formed projects and tasks.

mod error;
mod ids;
mod project;
mod task;
mod text;

pub use error::{BoardDomainError, ParseTaskStatusError};
pub use ids::{ProjectId, TaskId};
pub use project::{PersistedProjectData, Project, ProjectPatch};
pub use task::{
    DEADLINE_FORMAT, NewTask, PersistedTaskData, Task, TaskChanges, TaskPatch, TaskStatus,
    ensure_deadline_not_past, parse_deadline,
};
pub use text::{
    Description, MAX_DESCRIPTION_WORDS, MAX_NAME_WORDS, ProjectName, TaskTitle, word_count,
};
