//! Calculation result models for the payroll engine.
//!
//! This module contains the [`PaymentDetails`] breakdown produced by the
//! monthly payment calculation, and the [`CalculationResult`] envelope that
//! pairs it with an audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The pay and deductions breakdown for one month.
///
/// All monetary fields are unrounded currency amounts except `income_tax`,
/// which is whole pounds. Two-decimal presentation is left to the caller
/// (see [`crate::models::Payslip`]).
///
/// # Example
///
/// ```
/// use payroll_engine::models::PaymentDetails;
///
/// let details = PaymentDetails::zero(5, 2024);
/// assert!(details.total_gross_pay.is_zero());
/// assert_eq!(details.tax_period, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// Hours paid at the standard hourly rate.
    pub standard_hours: Decimal,
    /// Hours beyond the monthly cap, paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Standard hours multiplied by the hourly rate.
    pub standard_pay: Decimal,
    /// Overtime hours multiplied by the overtime rate.
    pub overtime_pay: Decimal,
    /// Standard pay plus overtime pay.
    pub total_gross_pay: Decimal,
    /// Monthly income tax.
    pub income_tax: Decimal,
    /// National Insurance contribution.
    pub ni_contribution: Decimal,
    /// Employee pension contribution.
    pub pension_contribution: Decimal,
    /// Income tax, NI and pension together.
    pub total_deductions: Decimal,
    /// Gross pay less all deductions.
    pub final_net_pay: Decimal,
    /// Month number (1-12) of the reference month.
    pub tax_period: u32,
    /// Calendar year of the reference month.
    pub tax_year: i32,
}

impl PaymentDetails {
    /// A breakdown with every amount at zero.
    pub fn zero(tax_period: u32, tax_year: i32) -> Self {
        Self {
            standard_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            standard_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            total_gross_pay: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            ni_contribution: Decimal::ZERO,
            pension_contribution: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            final_net_pay: Decimal::ZERO,
            tax_period,
            tax_year,
        }
    }

    /// Total hours worked in the month.
    pub fn total_hours(&self) -> Decimal {
        self.standard_hours + self.overtime_hours
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of
/// the payroll calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a monthly payroll calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The tax code applied.
    pub tax_code: String,
    /// The date identifying the month being paid.
    pub reference_month: NaiveDate,
    /// The weekly hour totals the calculation was run on.
    pub weekly_hours: Vec<Decimal>,
    /// The pay and deductions breakdown.
    pub payment: PaymentDetails,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
