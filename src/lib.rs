//! Taskboard: projects and tasks behind a JSON HTTP API.
//!
//! Projects own an ordered list of tasks. Caps bound how many of each may
//! exist, and a background job closes tasks whose deadline has passed.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Validated values and entities with no infrastructure
//!   dependencies
//! - **Ports**: Repository traits the services depend on
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`board`]: Project and task domain, ports, adapters and services
//! - [`api`]: Axum handlers, routes and the middleware stack
//! - [`config`]: Environment-driven configuration
//! - [`scheduler`]: Periodic overdue autoclose loop
//! - [`server`]: Process wiring and graceful shutdown
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod board;
pub mod config;
pub mod scheduler;
pub mod server;
pub mod telemetry;
