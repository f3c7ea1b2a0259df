//! Route tree.

pub mod health;
pub mod projects;
