//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for calculating monthly pay,
//! summarizing timesheets and recording payslips.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest, TimeEntryRequest, TimesheetRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
