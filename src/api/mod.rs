//! REST API over the board services.
//!
//! Routes live in [`routes`], handlers in [`handlers`], and
//! [`router::build_app_router`] assembles them with the middleware stack.
//! Failures render through [`error::ApiError`].

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::build_app_router;
pub use state::AppState;
