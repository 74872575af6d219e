//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate`,
//! `/payslips` and `/timesheet` endpoints.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::weekly_hours_for_month;
use crate::error::EngineResult;
use crate::models::{Employee, TimeEntry};

/// Request body for the `/calculate` and `/payslips` endpoints.
///
/// Hours come either as explicit weekly totals or as raw time entries for
/// the month. When both are present, `weekly_hours` wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// Any date in the month being paid.
    pub reference_month: NaiveDate,
    /// Hours worked in each week of the month.
    #[serde(default)]
    pub weekly_hours: Option<Vec<Decimal>>,
    /// Logged time entries, aggregated by ISO week when `weekly_hours` is absent.
    #[serde(default)]
    pub time_entries: Vec<TimeEntryRequest>,
}

impl CalculationRequest {
    /// Resolves the weekly totals to calculate with.
    pub fn resolve_weekly_hours(&self) -> EngineResult<Vec<Decimal>> {
        match &self.weekly_hours {
            Some(hours) => Ok(hours.clone()),
            None => {
                let entries: Vec<TimeEntry> =
                    self.time_entries.iter().cloned().map(Into::into).collect();
                weekly_hours_for_month(&entries, self.reference_month)
            }
        }
    }
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Pay per standard hour.
    pub hourly_rate: Decimal,
    /// Pay per overtime hour.
    pub overtime_rate: Decimal,
    /// HMRC tax code, e.g. "1257L". The scheme default applies when absent.
    #[serde(default)]
    pub tax_code: Option<String>,
}

/// A logged block of work in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryRequest {
    /// Unique identifier for the entry.
    pub id: String,
    /// The day the work was done.
    pub date: NaiveDate,
    /// Start time, `HH:MM:SS`.
    pub start_time: NaiveTime,
    /// End time, `HH:MM:SS`.
    pub end_time: NaiveTime,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Free-text note.
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for the `/timesheet` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// Any date in the month to summarize.
    pub reference_month: NaiveDate,
    /// Logged time entries.
    #[serde(default)]
    pub time_entries: Vec<TimeEntryRequest>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            hourly_rate: req.hourly_rate,
            overtime_rate: req.overtime_rate,
            tax_code: req.tax_code,
        }
    }
}

impl From<TimeEntryRequest> for TimeEntry {
    fn from(req: TimeEntryRequest) -> Self {
        TimeEntry {
            id: req.id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            break_minutes: req.break_minutes,
            description: req.description,
        }
    }
}
