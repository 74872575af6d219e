//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading tax tables,
//! validating inputs and recording payslips.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/scheme.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/scheme.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No tax table is effective on the requested date.
    #[error("No tax table effective on {date}")]
    TaxTableNotFound {
        /// The date for which a tax table was requested.
        date: NaiveDate,
    },

    /// An hours figure was negative or out of range.
    #[error("Invalid hours for '{field}': {message}")]
    InvalidHours {
        /// The input that carried the bad value.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A pay rate was negative or above the accepted ceiling.
    #[error("Invalid rate '{field}': {message}")]
    InvalidRate {
        /// The rate field that was invalid.
        field: String,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// A time entry was inconsistent.
    #[error("Invalid time entry '{entry_id}': {message}")]
    InvalidTimeEntry {
        /// The ID of the invalid entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A duration string was not of the form `"Xh Ym"`.
    #[error("Invalid duration '{value}'")]
    InvalidDuration {
        /// The string that failed to parse.
        value: String,
    },

    /// A payslip already exists for the employee and tax period.
    #[error("Payslip already recorded for employee '{employee_id}' in period {tax_period}/{tax_year}")]
    DuplicatePayslip {
        /// The employee the payslip belongs to.
        employee_id: String,
        /// The tax year of the existing payslip.
        tax_year: i32,
        /// The month number of the existing payslip.
        tax_period: u32,
    },

    /// The payslip store could not be accessed.
    #[error("Payslip store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
