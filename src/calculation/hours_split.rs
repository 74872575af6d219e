//! Standard/overtime hours split.
//!
//! Sums the weekly hour totals for a month and splits them at the monthly
//! standard-hours cap.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Monthly cap used by the main payment calculation.
pub const STANDARD_MONTHLY_CAP_HOURS: Decimal = Decimal::from_parts(170, 0, 0, false, 0);

/// Monthly cap used by the legacy "record last month" path.
///
/// Kept as a named alternative until product settles which cap applies.
pub const ALTERNATE_MONTHLY_CAP_HOURS: Decimal = Decimal::from_parts(160, 0, 0, false, 0);

/// The result of splitting a month's hours at the standard cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSplit {
    /// Sum of all weekly totals.
    pub total_hours: Decimal,
    /// Hours up to the cap.
    pub standard_hours: Decimal,
    /// Hours beyond the cap.
    pub overtime_hours: Decimal,
    /// The audit step recording the split.
    pub audit_step: AuditStep,
}

/// Splits a month's weekly hours into standard and overtime hours.
///
/// `standard_hours = min(total, cap)` and `overtime_hours = max(0, total - cap)`,
/// so the two always add back up to the total.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{split_monthly_hours, STANDARD_MONTHLY_CAP_HOURS};
/// use rust_decimal::Decimal;
///
/// let weeks = vec![Decimal::from(45); 4];
/// let split = split_monthly_hours(&weeks, STANDARD_MONTHLY_CAP_HOURS, 1);
///
/// assert_eq!(split.standard_hours, Decimal::from(170));
/// assert_eq!(split.overtime_hours, Decimal::from(10));
/// ```
pub fn split_monthly_hours(weekly_hours: &[Decimal], cap: Decimal, step_number: u32) -> HoursSplit {
    let total_hours: Decimal = weekly_hours.iter().copied().sum();
    let standard_hours = total_hours.min(cap);
    let overtime_hours = (total_hours - standard_hours).max(Decimal::ZERO);

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds the {} hour monthly cap: {} standard + {} overtime",
            total_hours.normalize(),
            cap.normalize(),
            standard_hours.normalize(),
            overtime_hours.normalize()
        )
    } else {
        format!(
            "{} hours worked is within the {} hour monthly cap",
            total_hours.normalize(),
            cap.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_hours_split".to_string(),
        rule_name: "Standard/Overtime Hours Split".to_string(),
        input: serde_json::json!({
            "weekly_hours": weekly_hours
                .iter()
                .map(|h| h.normalize().to_string())
                .collect::<Vec<_>>(),
            "monthly_cap": cap.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "standard_hours": standard_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    HoursSplit {
        total_hours,
        standard_hours,
        overtime_hours,
        audit_step,
    }
}
