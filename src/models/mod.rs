//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod payslip;
mod time_entry;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, PaymentDetails,
};
pub use employee::Employee;
pub use payslip::{Payslip, TaxPeriod};
pub use time_entry::TimeEntry;
