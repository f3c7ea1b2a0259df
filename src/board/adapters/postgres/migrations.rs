//! Embedded schema migration for the board tables.

use crate::board::ports::{BoardRepositoryError, BoardRepositoryResult};
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;

/// SQL creating the `projects` and `tasks` tables. Idempotent.
pub const CREATE_BOARD_TABLES_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_projects_and_tasks/up.sql");

/// Applies the board schema to the connected database.
///
/// # Errors
///
/// Returns [`BoardRepositoryError::Persistence`] when the SQL fails.
pub fn run_migrations(connection: &mut PgConnection) -> BoardRepositoryResult<()> {
    connection
        .batch_execute(CREATE_BOARD_TABLES_SQL)
        .map_err(BoardRepositoryError::persistence)
}
