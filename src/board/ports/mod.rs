//! Port contracts for the board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod repository;

pub use repository::{
    BoardRepositoryError, BoardRepositoryResult, ProjectRepository, TaskRepository,
};
