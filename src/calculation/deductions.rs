//! National Insurance and pension contributions.
//!
//! Both are flat percentages of monthly gross pay. NI is deliberately not
//! banded: one model, taken from the tax table's `ni_rate`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ContributionRates;
use crate::models::AuditStep;

/// NI and pension taken from a month's gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionsResult {
    /// National Insurance contribution.
    pub ni_contribution: Decimal,
    /// Employee pension contribution.
    pub pension_contribution: Decimal,
    /// The audit step recording both contributions.
    pub audit_step: AuditStep,
}

/// Applies the flat NI and pension rates to gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_contributions;
/// use payroll_engine::config::ContributionRates;
/// use rust_decimal::Decimal;
///
/// let rates = ContributionRates {
///     ni_rate: Decimal::new(12, 2),
///     pension_rate: Decimal::new(5, 2),
/// };
/// let result = calculate_contributions(Decimal::from(2400), &rates, 1);
///
/// assert_eq!(result.ni_contribution, Decimal::from(288));
/// assert_eq!(result.pension_contribution, Decimal::from(120));
/// ```
pub fn calculate_contributions(
    gross_pay: Decimal,
    rates: &ContributionRates,
    step_number: u32,
) -> ContributionsResult {
    let ni_contribution = gross_pay * rates.ni_rate;
    let pension_contribution = gross_pay * rates.pension_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "flat_contributions".to_string(),
        rule_name: "National Insurance and Pension".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "ni_rate": rates.ni_rate.normalize().to_string(),
            "pension_rate": rates.pension_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "ni_contribution": ni_contribution.normalize().to_string(),
            "pension_contribution": pension_contribution.normalize().to_string()
        }),
        reasoning: format!(
            "NI £{} x {}% = £{}; pension £{} x {}% = £{}",
            gross_pay.normalize(),
            (rates.ni_rate * Decimal::from(100)).normalize(),
            ni_contribution.normalize(),
            gross_pay.normalize(),
            (rates.pension_rate * Decimal::from(100)).normalize(),
            pension_contribution.normalize()
        ),
    };

    ContributionsResult {
        ni_contribution,
        pension_contribution,
        audit_step,
    }
}
