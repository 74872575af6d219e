//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settings that apply to every pay run, independent of tax year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeSettings {
    /// Short identifier for the scheme (e.g., "UK_PAYE").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The jurisdiction the tax tables belong to.
    pub jurisdiction: String,
    /// Hours per month paid at the standard rate before overtime applies.
    pub standard_monthly_cap_hours: Decimal,
    /// Tax code used when an employee record carries none.
    pub default_tax_code: String,
    /// Pay periods per year, used to annualize monthly pay.
    pub periods_per_year: u32,
    /// When set, a `<digits>L` tax code replaces the table's standard allowance.
    #[serde(default)]
    pub allowance_from_tax_code: bool,
}

/// Personal allowance settings for a tax year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowanceConfig {
    /// The standard personal allowance.
    pub standard: Decimal,
    /// Annual income above which the allowance starts to shrink.
    pub reduction_threshold: Decimal,
    /// Allowance lost per pound of income over the threshold.
    pub reduction_rate: Decimal,
}

/// Income tax bands, expressed on taxable income.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBands {
    /// Upper edge of the basic-rate band.
    pub basic_rate_threshold: Decimal,
    /// Upper edge of the higher-rate band.
    pub higher_rate_threshold: Decimal,
    /// Rate applied inside the basic-rate band.
    pub basic_rate: Decimal,
    /// Rate applied inside the higher-rate band.
    pub higher_rate: Decimal,
    /// Rate applied above the higher-rate threshold.
    pub additional_rate: Decimal,
}

/// Flat-rate contributions taken from gross pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionRates {
    /// National Insurance rate.
    pub ni_rate: Decimal,
    /// Employee pension contribution rate.
    pub pension_rate: Decimal,
}

/// A tax table for one tax year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxTable {
    /// The first day this table applies.
    pub effective_date: NaiveDate,
    /// Display label for the tax year (e.g., "2024/25").
    pub label: String,
    /// Personal allowance settings.
    pub personal_allowance: AllowanceConfig,
    /// Income tax bands.
    pub bands: TaxBands,
    /// NI and pension rates.
    pub contributions: ContributionRates,
}

/// The complete payroll configuration loaded from YAML files.
///
/// Aggregates the scheme settings and every tax table found in the
/// configuration directory.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    scheme: SchemeSettings,
    /// Tax tables by effective date (sorted oldest first).
    tax_tables: Vec<TaxTable>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(scheme: SchemeSettings, tax_tables: Vec<TaxTable>) -> Self {
        let mut sorted_tables = tax_tables;
        sorted_tables.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            scheme,
            tax_tables: sorted_tables,
        }
    }

    /// Returns the scheme settings.
    pub fn scheme(&self) -> &SchemeSettings {
        &self.scheme
    }

    /// Returns all tax tables, oldest first.
    pub fn tax_tables(&self) -> &[TaxTable] {
        &self.tax_tables
    }

    /// Returns the most recent tax table effective on or before `date`.
    pub fn tax_table_for(&self, date: NaiveDate) -> Option<&TaxTable> {
        self.tax_tables
            .iter()
            .rev()
            .find(|table| table.effective_date <= date)
    }

    /// Returns the tax table for the pay month containing `date`.
    ///
    /// Lookup uses the last day of that month, so every day of a month
    /// resolves to the same table.
    pub fn tax_table_for_month(&self, date: NaiveDate) -> Option<&TaxTable> {
        self.tax_table_for(month_end(date))
    }
}

/// The last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}
