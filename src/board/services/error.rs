//! Service-level error type and its classification.

use crate::board::{domain::BoardDomainError, ports::BoardRepositoryError};
use std::fmt;
use thiserror::Error;

/// Resource guarded by a configured cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CappedResource {
    /// Total number of projects.
    Projects,
    /// Total number of tasks across all projects.
    Tasks,
}

impl fmt::Display for CappedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Projects => "projects",
            Self::Tasks => "tasks",
        })
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
    /// A creation would exceed the configured maximum.
    #[error("maximum number of {resource} reached ({limit})")]
    CapExceeded {
        /// Capped resource.
        resource: CappedResource,
        /// Configured maximum.
        limit: usize,
    },
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Coarse classification of a [`BoardServiceError`] for callers that map
/// failures onto transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErrorKind {
    /// Input failed validation.
    Validation,
    /// A project name is already taken.
    DuplicateName,
    /// A referenced project or task does not exist.
    NotFound,
    /// A configured cap would be exceeded.
    CapExceeded,
    /// Unexpected infrastructure failure.
    Internal,
}

impl BoardServiceError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::Domain(_) => BoardErrorKind::Validation,
            Self::CapExceeded { .. } => BoardErrorKind::CapExceeded,
            Self::Repository(BoardRepositoryError::DuplicateProjectName(_)) => {
                BoardErrorKind::DuplicateName
            }
            Self::Repository(
                BoardRepositoryError::ProjectNotFound(_) | BoardRepositoryError::TaskNotFound(_),
            ) => BoardErrorKind::NotFound,
            Self::Repository(
                BoardRepositoryError::DuplicateProject(_)
                | BoardRepositoryError::DuplicateTask(_)
                | BoardRepositoryError::InvalidPersistedData(_)
                | BoardRepositoryError::Persistence(_),
            ) => BoardErrorKind::Internal,
        }
    }
}
