//! HTTP API module for the Timeclock Engine.
//!
//! This module provides the REST API endpoints for partitioning clock
//! events into pay periods and managing payroll submissions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ApproveRequest, PeriodsRequest, RejectRequest, SubmitPayrollRequest};
pub use response::ApiError;
pub use state::AppState;
