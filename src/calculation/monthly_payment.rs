//! Monthly payment calculation.
//!
//! Ties the individual stages together: validate inputs, split hours at the
//! monthly cap, price them, tax the result, take NI and pension, and arrive
//! at net pay. Everything after validation is pure arithmetic.

use std::time::Instant;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::{PayrollConfig, month_end};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, Employee, PaymentDetails,
};

use super::deductions::calculate_contributions;
use super::gross_pay::calculate_gross_pay;
use super::hours_split::split_monthly_hours;
use super::income_tax::calculate_income_tax;
use super::tax_code::{TaxCode, parse_tax_code};
use super::validation::{validate_cap, validate_rates, validate_weekly_hours};

/// The breakdown for one month together with the trail that produced it.
#[derive(Debug, Clone)]
pub struct MonthlyPayment {
    /// The tax code that was applied.
    pub tax_code: TaxCode,
    /// The pay and deductions breakdown.
    pub details: PaymentDetails,
    /// One step per calculation stage, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Non-fatal observations about the inputs.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates a month's pay and deductions from weekly hour totals.
///
/// # Arguments
///
/// * `weekly_hours` - Hours worked in each week overlapping the month
/// * `reference_month` - Any date in the month being paid; the tax table in
///   force on the last day of that month applies, so the day is irrelevant
/// * `employee` - Hourly and overtime rates and the tax code
/// * `config` - Scheme settings and tax tables
///
/// # Returns
///
/// Returns a [`MonthlyPayment`], or an error if:
/// - Any weekly total or rate is negative or above its ceiling
/// - More weeks are supplied than a month can overlap
/// - No tax table is in force by the end of the month
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::calculate_monthly_payment;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/uk_paye")?;
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     hourly_rate: Decimal::from(15),
///     overtime_rate: Decimal::new(225, 1),
///     tax_code: Some("1257L".to_string()),
/// };
/// let weeks = vec![Decimal::from(40); 4];
/// let month = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
///
/// let payment = calculate_monthly_payment(&weeks, month, &employee, loader.config())?;
/// assert_eq!(payment.details.total_gross_pay, Decimal::from(2400));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_monthly_payment(
    weekly_hours: &[Decimal],
    reference_month: NaiveDate,
    employee: &Employee,
    config: &PayrollConfig,
) -> EngineResult<MonthlyPayment> {
    let scheme = config.scheme();

    validate_weekly_hours(weekly_hours)?;
    validate_rates(employee)?;
    validate_cap(scheme.standard_monthly_cap_hours)?;
    let tax_code = parse_tax_code(employee.effective_tax_code(&scheme.default_tax_code));
    let table = config
        .tax_table_for_month(reference_month)
        .ok_or(EngineError::TaxTableNotFound {
            date: month_end(reference_month),
        })?;
    let base_allowance = tax_code.base_allowance(
        table.personal_allowance.standard,
        scheme.allowance_from_tax_code,
    );

    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let split = split_monthly_hours(weekly_hours, scheme.standard_monthly_cap_hours, step_number);
    audit_steps.push(split.audit_step);
    step_number += 1;

    let gross = calculate_gross_pay(
        split.standard_hours,
        split.overtime_hours,
        employee.hourly_rate,
        employee.overtime_rate,
        step_number,
    );
    audit_steps.push(gross.audit_step);
    step_number += 1;

    if split.overtime_hours > Decimal::ZERO && employee.overtime_rate < employee.hourly_rate {
        warnings.push(AuditWarning {
            code: "OVERTIME_RATE_BELOW_STANDARD".to_string(),
            message: format!(
                "Overtime rate £{} is lower than the hourly rate £{}",
                employee.overtime_rate.normalize(),
                employee.hourly_rate.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    let tax = calculate_income_tax(
        gross.total_gross_pay,
        base_allowance,
        table,
        scheme.periods_per_year,
        step_number,
    );
    step_number += tax.audit_steps.len() as u32;
    audit_steps.extend(tax.audit_steps);

    if tax.allowance.reduction > Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "PERSONAL_ALLOWANCE_TAPERED".to_string(),
            message: format!(
                "Personal allowance reduced by £{} for annualized pay £{}",
                tax.allowance.reduction.normalize(),
                tax.annualized_pay.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    let contributions = calculate_contributions(gross.total_gross_pay, &table.contributions, step_number);
    audit_steps.push(contributions.audit_step);
    step_number += 1;

    let total_deductions =
        tax.monthly_tax + contributions.ni_contribution + contributions.pension_contribution;
    let final_net_pay = gross.total_gross_pay - total_deductions;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "total_gross_pay": gross.total_gross_pay.normalize().to_string(),
            "income_tax": tax.monthly_tax.normalize().to_string(),
            "ni_contribution": contributions.ni_contribution.normalize().to_string(),
            "pension_contribution": contributions.pension_contribution.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.normalize().to_string(),
            "final_net_pay": final_net_pay.normalize().to_string()
        }),
        reasoning: format!(
            "£{} gross - £{} deductions = £{} net",
            gross.total_gross_pay.normalize(),
            total_deductions.normalize(),
            final_net_pay.normalize()
        ),
    });

    let details = PaymentDetails {
        standard_hours: split.standard_hours,
        overtime_hours: split.overtime_hours,
        standard_pay: gross.standard_pay,
        overtime_pay: gross.overtime_pay,
        total_gross_pay: gross.total_gross_pay,
        income_tax: tax.monthly_tax,
        ni_contribution: contributions.ni_contribution,
        pension_contribution: contributions.pension_contribution,
        total_deductions,
        final_net_pay,
        tax_period: reference_month.month(),
        tax_year: reference_month.year(),
    };

    Ok(MonthlyPayment {
        tax_code,
        details,
        audit_steps,
        warnings,
    })
}

/// Runs [`calculate_monthly_payment`] and wraps the outcome in a
/// [`CalculationResult`] with an id, timestamp and timing.
pub fn run_calculation(
    weekly_hours: Vec<Decimal>,
    reference_month: NaiveDate,
    employee: &Employee,
    config: &PayrollConfig,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();
    let payment = calculate_monthly_payment(&weekly_hours, reference_month, employee, config)?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        tax_code: payment.tax_code.code,
        reference_month,
        weekly_hours,
        payment: payment.details,
        audit_trace: AuditTrace {
            steps: payment.audit_steps,
            warnings: payment.warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{ALTERNATE_MONTHLY_CAP_HOURS, STANDARD_MONTHLY_CAP_HOURS};
    use crate::config::{
        AllowanceConfig, ContributionRates, SchemeSettings, TaxBands, TaxTable,
    };
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_scheme(cap: Decimal) -> SchemeSettings {
        SchemeSettings {
            code: "UK_PAYE".to_string(),
            name: "UK PAYE monthly payroll".to_string(),
            jurisdiction: "GB".to_string(),
            standard_monthly_cap_hours: cap,
            default_tax_code: "1257L".to_string(),
            periods_per_year: 12,
            allowance_from_tax_code: false,
        }
    }

    fn create_test_table(effective: NaiveDate, label: &str, basic_rate: &str) -> TaxTable {
        TaxTable {
            effective_date: effective,
            label: label.to_string(),
            personal_allowance: AllowanceConfig {
                standard: dec("12570"),
                reduction_threshold: dec("100000"),
                reduction_rate: dec("0.5"),
            },
            bands: TaxBands {
                basic_rate_threshold: dec("37700"),
                higher_rate_threshold: dec("125140"),
                basic_rate: dec(basic_rate),
                higher_rate: dec("0.40"),
                additional_rate: dec("0.45"),
            },
            contributions: ContributionRates {
                ni_rate: dec("0.12"),
                pension_rate: dec("0.05"),
            },
        }
    }

    fn create_test_config(cap: Decimal) -> PayrollConfig {
        let table = create_test_table(NaiveDate::from_ymd_opt(2024, 4, 6).unwrap(), "2024/25", "0.20");
        PayrollConfig::new(create_test_scheme(cap), vec![table])
    }

    fn create_test_employee(hourly: &str, overtime: &str) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            hourly_rate: dec(hourly),
            overtime_rate: dec(overtime),
            tax_code: Some("1257L".to_string()),
        }
    }

    fn may_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    fn assert_all_zero(details: &PaymentDetails) {
        assert!(details.standard_hours.is_zero());
        assert!(details.overtime_hours.is_zero());
        assert!(details.standard_pay.is_zero());
        assert!(details.overtime_pay.is_zero());
        assert!(details.total_gross_pay.is_zero());
        assert!(details.income_tax.is_zero());
        assert!(details.ni_contribution.is_zero());
        assert!(details.pension_contribution.is_zero());
        assert!(details.total_deductions.is_zero());
        assert!(details.final_net_pay.is_zero());
    }

    /// Four 40-hour weeks at 15/22.5.
    #[test]
    fn test_four_forty_hour_weeks() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");
        let weeks = vec![dec("40"); 4];

        let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        let details = &payment.details;

        assert_eq!(details.standard_hours, dec("160"));
        assert_eq!(details.overtime_hours, Decimal::ZERO);
        assert_eq!(details.standard_pay, dec("2400.00"));
        assert_eq!(details.total_gross_pay, dec("2400.00"));
        assert_eq!(details.income_tax, dec("271"));
        assert_eq!(details.ni_contribution, dec("2400") * dec("0.12"));
        assert_eq!(details.pension_contribution, dec("2400") * dec("0.05"));
        assert_eq!(details.total_deductions, dec("679"));
        assert_eq!(details.final_net_pay, dec("1721"));
        assert_eq!(details.tax_period, 5);
        assert_eq!(details.tax_year, 2024);
    }

    /// Four 45-hour weeks against the 170 cap.
    #[test]
    fn test_four_forty_five_hour_weeks_with_overtime() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");
        let weeks = vec![dec("45"); 4];

        let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        let details = &payment.details;

        assert_eq!(details.standard_hours, dec("170"));
        assert_eq!(details.overtime_hours, dec("10"));
        assert_eq!(details.standard_pay, dec("2550"));
        assert_eq!(details.overtime_pay, dec("225"));
        assert_eq!(details.total_gross_pay, dec("2775"));
        // 33300 - 12570 = 20730 * 0.2 = 4146 / 12 = 345.5 -> 346
        assert_eq!(details.income_tax, dec("346"));
        assert_eq!(details.ni_contribution, dec("333"));
        assert_eq!(details.pension_contribution, dec("138.75"));
        assert_eq!(details.final_net_pay, dec("1957.25"));
    }

    #[test]
    fn test_alternate_cap_config() {
        let config = create_test_config(ALTERNATE_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");
        let weeks = vec![dec("45"); 4];

        let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        assert_eq!(payment.details.standard_hours, dec("160"));
        assert_eq!(payment.details.overtime_hours, dec("20"));
    }

    #[test]
    fn test_empty_weeks_give_all_zero_breakdown() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");

        let payment = calculate_monthly_payment(&[], may_2024(), &employee, &config).unwrap();
        assert_all_zero(&payment.details);
        assert_eq!(payment.details, PaymentDetails::zero(5, 2024));
    }

    #[test]
    fn test_all_zero_weeks_give_all_zero_breakdown() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");
        let weeks = vec![Decimal::ZERO; 5];

        let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        assert_all_zero(&payment.details);
    }

    #[test]
    fn test_audit_steps_in_order() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");
        let weeks = vec![dec("40"); 4];

        let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        let rule_ids: Vec<&str> = payment.audit_steps.iter().map(|s| s.rule_id.as_str()).collect();

        assert_eq!(
            rule_ids,
            vec![
                "monthly_hours_split",
                "gross_pay",
                "personal_allowance",
                "income_tax_bands",
                "flat_contributions",
                "net_pay"
            ]
        );
        for (i, step) in payment.audit_steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_default_tax_code_applies_when_missing() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let mut employee = create_test_employee("15", "22.5");
        employee.tax_code = None;

        let payment =
            calculate_monthly_payment(&[dec("40")], may_2024(), &employee, &config).unwrap();
        assert_eq!(payment.tax_code.code, "1257L");
    }

    #[test]
    fn test_tax_code_does_not_change_standard_allowance() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let mut employee = create_test_employee("15", "22.5");
        let weeks = vec![dec("40"); 4];

        for code in ["1100L", "0L", "1257L"] {
            employee.tax_code = Some(code.to_string());
            let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
            assert_eq!(payment.details.income_tax, dec("271"), "{}", code);
            assert_eq!(payment.tax_code.code, code);
        }
    }

    #[test]
    fn test_coded_allowance_applies_when_scheme_opts_in() {
        let mut scheme = create_test_scheme(STANDARD_MONTHLY_CAP_HOURS);
        scheme.allowance_from_tax_code = true;
        let table = create_test_table(NaiveDate::from_ymd_opt(2024, 4, 6).unwrap(), "2024/25", "0.20");
        let config = PayrollConfig::new(scheme, vec![table]);
        let mut employee = create_test_employee("15", "22.5");
        let weeks = vec![dec("40"); 4];

        employee.tax_code = Some("0L".to_string());
        let no_allowance = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        // 28800 * 0.2 / 12 = 480
        assert_eq!(no_allowance.details.income_tax, dec("480"));

        employee.tax_code = Some("BR".to_string());
        let fallback = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        assert_eq!(fallback.details.income_tax, dec("271"));
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");

        let result = calculate_monthly_payment(&[dec("40"), dec("-2")], may_2024(), &employee, &config);
        assert!(matches!(result, Err(EngineError::InvalidHours { .. })));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("-15", "22.5");

        let result = calculate_monthly_payment(&[dec("40")], may_2024(), &employee, &config);
        assert!(matches!(result, Err(EngineError::InvalidRate { .. })));
    }

    #[test]
    fn test_non_cumulative_tax_codes_are_accepted_as_labels() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let mut employee = create_test_employee("15", "22.5");
        let weeks = vec![dec("40"); 4];

        for code in ["BR", "S1257L", "1257L W1", "K475"] {
            employee.tax_code = Some(code.to_string());
            let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
            assert_eq!(payment.tax_code.code, code);
            assert_eq!(payment.details.income_tax, dec("271"), "{}", code);
        }
    }

    #[test]
    fn test_every_day_of_april_uses_same_tax_table() {
        let tables = vec![
            create_test_table(NaiveDate::from_ymd_opt(2023, 4, 6).unwrap(), "2023/24", "0.10"),
            create_test_table(NaiveDate::from_ymd_opt(2024, 4, 6).unwrap(), "2024/25", "0.20"),
        ];
        let config = PayrollConfig::new(create_test_scheme(STANDARD_MONTHLY_CAP_HOURS), tables);
        let employee = create_test_employee("15", "22.5");
        let weeks = vec![dec("40"); 4];

        for day in 1..=30 {
            let date = NaiveDate::from_ymd_opt(2024, 4, day).unwrap();
            let payment = calculate_monthly_payment(&weeks, date, &employee, &config).unwrap();
            assert_eq!(payment.details.income_tax, dec("271"), "2024-04-{:02}", day);
            assert_eq!(payment.details.tax_period, 4);
        }
    }

    #[test]
    fn test_missing_tax_table_reports_month_end() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");
        let month = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        match calculate_monthly_payment(&[dec("40")], month, &employee, &config) {
            Err(EngineError::TaxTableNotFound { date }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
            }
            other => panic!("Expected TaxTableNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_inputs_are_rejected_without_overflow() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("1000000000", "1000000000");

        let result = calculate_monthly_payment(
            &[dec("1000000000000000000000")],
            may_2024(),
            &employee,
            &config,
        );
        assert!(matches!(result, Err(EngineError::InvalidHours { .. })));

        let result = calculate_monthly_payment(&[dec("168")], may_2024(), &employee, &config);
        assert!(matches!(result, Err(EngineError::InvalidRate { .. })));
    }

    #[test]
    fn test_largest_accepted_inputs_calculate() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("100000", "100000");
        let weeks = vec![dec("168"); 6];

        let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        assert_eq!(payment.details.total_gross_pay, dec("100800000"));
    }

    #[test]
    fn test_month_without_tax_table_is_rejected() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");
        let month = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();

        let result = calculate_monthly_payment(&[dec("40")], month, &employee, &config);
        assert!(matches!(result, Err(EngineError::TaxTableNotFound { .. })));
    }

    #[test]
    fn test_overtime_rate_below_standard_warns() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "10");
        let weeks = vec![dec("45"); 4];

        let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        assert_eq!(payment.warnings.len(), 1);
        assert_eq!(payment.warnings[0].code, "OVERTIME_RATE_BELOW_STANDARD");
    }

    #[test]
    fn test_high_earner_warns_about_tapered_allowance() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("60", "90");
        let weeks = vec![dec("40"); 4];

        // 9600 * 12 = 115200, over the 100000 taper threshold
        let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        assert!(payment
            .warnings
            .iter()
            .any(|w| w.code == "PERSONAL_ALLOWANCE_TAPERED"));
    }

    #[test]
    fn test_reference_month_only_changes_labels() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");
        let weeks = vec![dec("38"); 4];

        let may = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
        let december = calculate_monthly_payment(
            &weeks,
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            &employee,
            &config,
        )
        .unwrap();

        assert_eq!(may.details.final_net_pay, december.details.final_net_pay);
        assert_eq!(december.details.tax_period, 12);
    }

    #[test]
    fn test_run_calculation_wraps_result() {
        let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
        let employee = create_test_employee("15", "22.5");

        let result = run_calculation(vec![dec("40"); 4], may_2024(), &employee, &config).unwrap();

        assert_eq!(result.employee_id, "emp_001");
        assert_eq!(result.tax_code, "1257L");
        assert_eq!(result.weekly_hours.len(), 4);
        assert_eq!(result.payment.total_gross_pay, dec("2400"));
        assert_eq!(result.audit_trace.steps.len(), 6);
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    }

    fn weekly_hours_strategy() -> impl Strategy<Value = Vec<Decimal>> {
        prop::collection::vec(0i64..8_000, 0..6)
            .prop_map(|v| v.into_iter().map(|h| Decimal::new(h, 2)).collect())
    }

    fn rate_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..20_000).prop_map(|r| Decimal::new(r, 2))
    }

    proptest! {
        #[test]
        fn prop_hours_and_money_identities_hold(
            weeks in weekly_hours_strategy(),
            hourly in rate_strategy(),
            overtime in rate_strategy(),
        ) {
            let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
            let employee = Employee {
                id: "emp_prop".to_string(),
                hourly_rate: hourly,
                overtime_rate: overtime,
                tax_code: None,
            };

            let payment = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
            let d = &payment.details;
            let sum: Decimal = weeks.iter().copied().sum();

            prop_assert_eq!(d.standard_hours + d.overtime_hours, sum);
            prop_assert!(d.overtime_hours >= Decimal::ZERO);
            prop_assert!(d.standard_hours <= STANDARD_MONTHLY_CAP_HOURS);
            prop_assert_eq!(d.total_gross_pay, d.standard_pay + d.overtime_pay);
            prop_assert_eq!(
                d.final_net_pay,
                d.total_gross_pay - d.income_tax - d.ni_contribution - d.pension_contribution
            );
        }

        #[test]
        fn prop_more_hours_never_reduce_gross(
            weeks in weekly_hours_strategy().prop_filter("need a week", |w| !w.is_empty()),
            index in any::<prop::sample::Index>(),
            extra in 1i64..2_000,
            hourly in rate_strategy(),
            overtime in rate_strategy(),
        ) {
            let config = create_test_config(STANDARD_MONTHLY_CAP_HOURS);
            let employee = Employee {
                id: "emp_prop".to_string(),
                hourly_rate: hourly,
                overtime_rate: overtime,
                tax_code: None,
            };

            let mut more = weeks.clone();
            let i = index.index(more.len());
            more[i] += Decimal::new(extra, 2);

            let before = calculate_monthly_payment(&weeks, may_2024(), &employee, &config).unwrap();
            let after = calculate_monthly_payment(&more, may_2024(), &employee, &config).unwrap();

            prop_assert!(after.details.total_gross_pay >= before.details.total_gross_pay);
        }
    }
}
