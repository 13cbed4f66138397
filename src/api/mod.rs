//! HTTP API module for the vacation calculator.
//!
//! This module provides stateless REST endpoints over the calculation core:
//! a full report for a list of vacations and the hour breakdown for a single
//! pair of clock times.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{create_router, serve};
pub use request::{CalculationRequest, HoursRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
