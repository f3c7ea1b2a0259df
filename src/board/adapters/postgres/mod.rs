//! `PostgreSQL` adapter for board persistence.

mod migrations;
mod models;
mod project;
mod repository;
mod schema;
mod task;

pub use migrations::{CREATE_BOARD_TABLES_SQL, run_migrations};
pub use repository::{BoardPgPool, PostgresBoardRepository, build_pool};
