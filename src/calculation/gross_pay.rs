//! Gross pay calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Standard, overtime and total gross pay for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossPayResult {
    /// Standard hours multiplied by the hourly rate.
    pub standard_pay: Decimal,
    /// Overtime hours multiplied by the overtime rate.
    pub overtime_pay: Decimal,
    /// Sum of standard and overtime pay.
    pub total_gross_pay: Decimal,
    /// The audit step recording the calculation.
    pub audit_step: AuditStep,
}

/// Prices standard and overtime hours at their respective rates.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_gross_pay(
///     Decimal::from(170),
///     Decimal::from(10),
///     Decimal::from(15),
///     Decimal::new(225, 1),
///     1,
/// );
/// assert_eq!(result.standard_pay, Decimal::from(2550));
/// assert_eq!(result.overtime_pay, Decimal::from(225));
/// assert_eq!(result.total_gross_pay, Decimal::from(2775));
/// ```
pub fn calculate_gross_pay(
    standard_hours: Decimal,
    overtime_hours: Decimal,
    hourly_rate: Decimal,
    overtime_rate: Decimal,
    step_number: u32,
) -> GrossPayResult {
    let standard_pay = standard_hours * hourly_rate;
    let overtime_pay = overtime_hours * overtime_rate;
    let total_gross_pay = standard_pay + overtime_pay;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay Calculation".to_string(),
        input: serde_json::json!({
            "standard_hours": standard_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "overtime_rate": overtime_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "standard_pay": standard_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "total_gross_pay": total_gross_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} hours x £{} + {} overtime hours x £{} = £{}",
            standard_hours.normalize(),
            hourly_rate.normalize(),
            overtime_hours.normalize(),
            overtime_rate.normalize(),
            total_gross_pay.normalize()
        ),
    };

    GrossPayResult {
        standard_pay,
        overtime_pay,
        total_gross_pay,
        audit_step,
    }
}
