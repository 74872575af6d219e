//! Income tax calculation.
//!
//! Monthly pay is annualized, the personal allowance is tapered for high
//! earners, and the remaining taxable income is charged through three bands
//! from the top down:
//!
//! - **Additional rate:** taxable income above the higher-rate threshold
//! - **Higher rate:** taxable income between the basic-rate and higher-rate thresholds
//! - **Basic rate:** everything below the basic-rate threshold
//!
//! The monthly figure is the annual tax divided by the number of pay
//! periods, rounded to whole pounds.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::{AllowanceConfig, TaxBands, TaxTable};
use crate::models::AuditStep;

/// Personal allowance after tapering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalAllowance {
    /// Allowance before tapering.
    pub base: Decimal,
    /// Amount withdrawn for income above the reduction threshold.
    pub reduction: Decimal,
    /// Allowance actually applied.
    pub applied: Decimal,
}

/// Amount of taxable income falling in each band, with the tax due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBandBreakdown {
    /// Taxable income charged at the basic rate.
    pub basic_amount: Decimal,
    /// Taxable income charged at the higher rate.
    pub higher_amount: Decimal,
    /// Taxable income charged at the additional rate.
    pub additional_amount: Decimal,
    /// Total annual tax across all bands.
    pub annual_tax: Decimal,
}

/// The result of the income tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    /// Gross pay scaled to a year.
    pub annualized_pay: Decimal,
    /// The allowance applied.
    pub allowance: PersonalAllowance,
    /// Annualized pay less the allowance, floored at zero.
    pub taxable_income: Decimal,
    /// Band amounts and annual tax.
    pub bands: TaxBandBreakdown,
    /// Tax for the month, in whole pounds.
    pub monthly_tax: Decimal,
    /// Audit steps: allowance, then bands.
    pub audit_steps: Vec<AuditStep>,
}

/// Tapers the personal allowance for annual income above the threshold.
///
/// The reduction is `floor((income - threshold) * rate)`, never more than
/// the allowance itself.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::personal_allowance;
/// use payroll_engine::config::AllowanceConfig;
/// use rust_decimal::Decimal;
///
/// let config = AllowanceConfig {
///     standard: Decimal::from(12570),
///     reduction_threshold: Decimal::from(100000),
///     reduction_rate: Decimal::new(5, 1),
/// };
///
/// let allowance = personal_allowance(Decimal::from(110000), Decimal::from(12570), &config);
/// assert_eq!(allowance.applied, Decimal::from(7570));
/// ```
pub fn personal_allowance(
    annualized_pay: Decimal,
    base: Decimal,
    config: &AllowanceConfig,
) -> PersonalAllowance {
    let reduction = if annualized_pay > config.reduction_threshold {
        ((annualized_pay - config.reduction_threshold) * config.reduction_rate)
            .floor()
            .min(base)
    } else {
        Decimal::ZERO
    };

    PersonalAllowance {
        base,
        reduction,
        applied: base - reduction,
    }
}

/// Charges taxable income through the three bands.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_tax_bands;
/// use payroll_engine::config::TaxBands;
/// use rust_decimal::Decimal;
///
/// let bands = TaxBands {
///     basic_rate_threshold: Decimal::from(37700),
///     higher_rate_threshold: Decimal::from(125140),
///     basic_rate: Decimal::new(20, 2),
///     higher_rate: Decimal::new(40, 2),
///     additional_rate: Decimal::new(45, 2),
/// };
///
/// let breakdown = apply_tax_bands(Decimal::from(40000), &bands);
/// assert_eq!(breakdown.basic_amount, Decimal::from(37700));
/// assert_eq!(breakdown.higher_amount, Decimal::from(2300));
/// assert_eq!(breakdown.annual_tax, Decimal::from(8460));
/// ```
pub fn apply_tax_bands(taxable_income: Decimal, bands: &TaxBands) -> TaxBandBreakdown {
    let mut remaining = taxable_income.max(Decimal::ZERO);
    let mut annual_tax = Decimal::ZERO;

    let additional_amount = if remaining > bands.higher_rate_threshold {
        let amount = remaining - bands.higher_rate_threshold;
        remaining = bands.higher_rate_threshold;
        amount
    } else {
        Decimal::ZERO
    };
    annual_tax += additional_amount * bands.additional_rate;

    let higher_amount = if remaining > bands.basic_rate_threshold {
        let amount = remaining - bands.basic_rate_threshold;
        remaining = bands.basic_rate_threshold;
        amount
    } else {
        Decimal::ZERO
    };
    annual_tax += higher_amount * bands.higher_rate;

    let basic_amount = remaining;
    annual_tax += basic_amount * bands.basic_rate;

    TaxBandBreakdown {
        basic_amount,
        higher_amount,
        additional_amount,
        annual_tax,
    }
}

/// Calculates monthly income tax on a month's gross pay.
///
/// # Arguments
///
/// * `monthly_gross` - Gross pay for the month
/// * `base_allowance` - Personal allowance from the employee's tax code
/// * `table` - The tax table in force
/// * `periods_per_year` - Pay periods used to annualize and de-annualize
/// * `step_number_start` - The starting step number for audit trail sequencing
pub fn calculate_income_tax(
    monthly_gross: Decimal,
    base_allowance: Decimal,
    table: &TaxTable,
    periods_per_year: u32,
    step_number_start: u32,
) -> IncomeTaxResult {
    let periods = Decimal::from(periods_per_year);
    let annualized_pay = monthly_gross * periods;

    let allowance = personal_allowance(annualized_pay, base_allowance, &table.personal_allowance);
    let taxable_income = (annualized_pay - allowance.applied).max(Decimal::ZERO);
    let bands = apply_tax_bands(taxable_income, &table.bands);
    let monthly_tax = (bands.annual_tax / periods)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let allowance_reasoning = if allowance.reduction > Decimal::ZERO {
        format!(
            "Annualized pay £{} exceeds £{}: allowance £{} reduced by £{} to £{}",
            annualized_pay.normalize(),
            table.personal_allowance.reduction_threshold.normalize(),
            allowance.base.normalize(),
            allowance.reduction.normalize(),
            allowance.applied.normalize()
        )
    } else {
        format!(
            "Full personal allowance of £{} applies to annualized pay £{}",
            allowance.applied.normalize(),
            annualized_pay.normalize()
        )
    };

    let allowance_step = AuditStep {
        step_number: step_number_start,
        rule_id: "personal_allowance".to_string(),
        rule_name: "Personal Allowance".to_string(),
        input: serde_json::json!({
            "monthly_gross": monthly_gross.normalize().to_string(),
            "periods_per_year": periods_per_year,
            "annualized_pay": annualized_pay.normalize().to_string(),
            "base_allowance": allowance.base.normalize().to_string(),
            "tax_year": table.label
        }),
        output: serde_json::json!({
            "reduction": allowance.reduction.normalize().to_string(),
            "allowance": allowance.applied.normalize().to_string(),
            "taxable_income": taxable_income.normalize().to_string()
        }),
        reasoning: allowance_reasoning,
    };

    let bands_step = AuditStep {
        step_number: step_number_start + 1,
        rule_id: "income_tax_bands".to_string(),
        rule_name: "Income Tax Bands".to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
            "basic_rate_threshold": table.bands.basic_rate_threshold.normalize().to_string(),
            "higher_rate_threshold": table.bands.higher_rate_threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "basic_amount": bands.basic_amount.normalize().to_string(),
            "higher_amount": bands.higher_amount.normalize().to_string(),
            "additional_amount": bands.additional_amount.normalize().to_string(),
            "annual_tax": bands.annual_tax.normalize().to_string(),
            "monthly_tax": monthly_tax.normalize().to_string()
        }),
        reasoning: format!(
            "£{} at {}% + £{} at {}% + £{} at {}% = £{} per year, £{} per period",
            bands.basic_amount.normalize(),
            (table.bands.basic_rate * Decimal::from(100)).normalize(),
            bands.higher_amount.normalize(),
            (table.bands.higher_rate * Decimal::from(100)).normalize(),
            bands.additional_amount.normalize(),
            (table.bands.additional_rate * Decimal::from(100)).normalize(),
            bands.annual_tax.normalize(),
            monthly_tax.normalize()
        ),
    };

    IncomeTaxResult {
        annualized_pay,
        allowance,
        taxable_income,
        bands,
        monthly_tax,
        audit_steps: vec![allowance_step, bands_step],
    }
}
