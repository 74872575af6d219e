//! Payslip and tax period models.
//!
//! A [`Payslip`] is the recorded form of a [`PaymentDetails`] breakdown,
//! keyed by employee and [`TaxPeriod`].

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::PaymentDetails;

/// A month within a year, ordered chronologically.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxPeriod;
/// use chrono::NaiveDate;
///
/// let period = TaxPeriod::from_date(NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
/// assert_eq!(period, TaxPeriod::new(2024, 3));
/// assert_eq!(period.months_before(3), TaxPeriod::new(2023, 12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaxPeriod {
    /// Calendar year.
    pub tax_year: i32,
    /// Month number, 1-12.
    pub tax_period: u32,
}

impl TaxPeriod {
    /// Creates a period from a year and month number.
    pub fn new(tax_year: i32, tax_period: u32) -> Self {
        Self {
            tax_year,
            tax_period,
        }
    }

    /// The period containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The period `months` months earlier.
    pub fn months_before(self, months: u32) -> Self {
        let index = self.tax_year * 12 + self.tax_period as i32 - 1 - months as i32;
        Self::new(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
    }
}

impl fmt::Display for TaxPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.tax_year, self.tax_period)
    }
}

/// A recorded payslip.
///
/// Amounts are rounded to two decimal places when the payslip is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier of the payslip.
    pub id: Uuid,
    /// The employee the payslip belongs to.
    pub employee_id: String,
    /// The tax code applied.
    pub tax_code: String,
    /// When the payslip was recorded.
    pub pay_date: DateTime<Utc>,
    /// Month number (1-12).
    pub tax_period: u32,
    /// Calendar year.
    pub tax_year: i32,
    /// Hours paid at the standard rate.
    pub standard_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Pay for standard hours.
    pub standard_pay: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Gross pay.
    pub total_gross: Decimal,
    /// Income tax.
    pub tax_amount: Decimal,
    /// National Insurance.
    pub ni_amount: Decimal,
    /// Pension contribution.
    pub pension_amount: Decimal,
    /// Net pay.
    pub net_pay: Decimal,
}

fn to_pence(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl Payslip {
    /// Builds a payslip from a calculated breakdown.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{PaymentDetails, Payslip};
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    ///
    /// let mut details = PaymentDetails::zero(4, 2024);
    /// details.total_gross_pay = Decimal::new(1234567, 4); // 123.4567
    /// let payslip = Payslip::from_details("emp_001", "1257L", &details, Utc::now());
    /// assert_eq!(payslip.total_gross, Decimal::new(12346, 2));
    /// ```
    pub fn from_details(
        employee_id: &str,
        tax_code: &str,
        details: &PaymentDetails,
        pay_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            tax_code: tax_code.to_string(),
            pay_date,
            tax_period: details.tax_period,
            tax_year: details.tax_year,
            standard_hours: to_pence(details.standard_hours),
            overtime_hours: to_pence(details.overtime_hours),
            standard_pay: to_pence(details.standard_pay),
            overtime_pay: to_pence(details.overtime_pay),
            total_gross: to_pence(details.total_gross_pay),
            tax_amount: to_pence(details.income_tax),
            ni_amount: to_pence(details.ni_contribution),
            pension_amount: to_pence(details.pension_contribution),
            net_pay: to_pence(details.final_net_pay),
        }
    }

    /// The period this payslip covers.
    pub fn period(&self) -> TaxPeriod {
        TaxPeriod::new(self.tax_year, self.tax_period)
    }
}
