//! HTTP API module for the shift roster generator.
//!
//! This module provides REST endpoints that generate a schedule from a
//! posted or stored roster and return it as JSON or as a text grid, plus
//! endpoints that maintain the stored roster and the remembered selection.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, ScheduleRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
