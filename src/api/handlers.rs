//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{run_calculation, summarize_timesheet};
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, Employee, Payslip, TaxPeriod, TimeEntry};

use super::request::{CalculationRequest, TimesheetRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Months of history returned by `GET /payslips/:employee_id`, including
/// the current month.
const PAYSLIP_HISTORY_MONTHS: u32 = 12;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/timesheet", post(timesheet_handler))
        .route("/payslips", post(create_payslip_handler))
        .route("/payslips/:employee_id", get(list_payslips_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Resolves hours and runs the monthly calculation for a request.
fn calculate_for_request(
    request: &CalculationRequest,
    state: &AppState,
) -> EngineResult<(Employee, CalculationResult)> {
    let weekly_hours = request.resolve_weekly_hours()?;
    let employee: Employee = request.employee.clone().into();
    let result = run_calculation(
        weekly_hours,
        request.reference_month,
        &employee,
        state.config().config(),
    )?;
    Ok((employee, result))
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the monthly breakdown with
/// its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match calculate_for_request(&request, &state) {
        Ok((employee, result)) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                weeks = result.weekly_hours.len(),
                total_hours = %result.payment.total_hours(),
                gross_pay = %result.payment.total_gross_pay,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /timesheet endpoint.
///
/// Aggregates time entries into weekly totals for the month.
async fn timesheet_handler(
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let entries: Vec<TimeEntry> = request.time_entries.into_iter().map(Into::into).collect();
    match summarize_timesheet(&entries, request.reference_month) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                entries = summary.entry_count,
                total_hours = %summary.total_hours,
                "Timesheet summarized"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /payslips endpoint.
///
/// Calculates the month and records the result. A second payslip for the
/// same employee and period is rejected with 409.
async fn create_payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let recorded = calculate_for_request(&request, &state).and_then(|(employee, result)| {
        let payslip = Payslip::from_details(&employee.id, &result.tax_code, &result.payment, Utc::now());
        state.store().insert(payslip)
    });

    match recorded {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %payslip.employee_id,
                period = %payslip.period(),
                net_pay = %payslip.net_pay,
                "Payslip recorded"
            );
            json_response(StatusCode::CREATED, payslip)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /payslips/:employee_id endpoint.
///
/// Returns the employee's payslips for the last twelve months, newest first.
async fn list_payslips_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let since = TaxPeriod::from_date(Utc::now().date_naive()).months_before(PAYSLIP_HISTORY_MONTHS - 1);

    match state.store().list_for_employee(&employee_id, since) {
        Ok(payslips) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                since = %since,
                count = payslips.len(),
                "Payslips listed"
            );
            json_response(StatusCode::OK, payslips)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}
