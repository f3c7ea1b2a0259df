//! HTTP request handlers.

pub mod health;
pub mod project;
pub mod task;
