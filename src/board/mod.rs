//! Project and task board.
//!
//! Projects own an ordered list of tasks. Names, titles and descriptions are
//! word-limited, task deadlines may not be set in the past, and the number of
//! projects and tasks is capped system-wide. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
