//! Calculation logic for the payroll engine.
//!
//! This module contains the monthly pay pipeline: splitting hours at the
//! standard cap, gross pay, tax code parsing, personal allowance and income
//! tax bands, flat NI and pension contributions, and net pay. It also holds
//! the timesheet helpers that turn time entries into weekly totals.

mod deductions;
mod gross_pay;
mod hours_split;
mod income_tax;
mod monthly_payment;
mod tax_code;
mod timesheet;
mod validation;

pub use deductions::{ContributionsResult, calculate_contributions};
pub use gross_pay::{GrossPayResult, calculate_gross_pay};
pub use hours_split::{
    ALTERNATE_MONTHLY_CAP_HOURS, HoursSplit, STANDARD_MONTHLY_CAP_HOURS, split_monthly_hours,
};
pub use income_tax::{
    IncomeTaxResult, PersonalAllowance, TaxBandBreakdown, apply_tax_bands, calculate_income_tax,
    personal_allowance,
};
pub use monthly_payment::{MonthlyPayment, calculate_monthly_payment, run_calculation};
pub use tax_code::{TaxCode, parse_tax_code};
pub use timesheet::{
    TimesheetSummary, WeeklyTotal, format_duration, parse_duration, summarize_timesheet,
    weekly_hours_for_month,
};
pub use validation::{
    MAX_HOURLY_RATE, MAX_WEEKLY_HOURS, MAX_WEEKS_PER_MONTH, validate_cap, validate_rates,
    validate_weekly_hours,
};
