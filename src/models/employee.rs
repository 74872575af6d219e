//! Employee model.
//!
//! This module defines the [`Employee`] struct carrying the pay rates and
//! tax code that the payroll calculation needs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee being paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Pay per standard hour.
    pub hourly_rate: Decimal,
    /// Pay per overtime hour.
    pub overtime_rate: Decimal,
    /// HMRC tax code (e.g., "1257L"). The scheme default applies when absent.
    #[serde(default)]
    pub tax_code: Option<String>,
}

impl Employee {
    /// Returns the tax code to apply, falling back to `default_code` when
    /// the employee has none or it is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     hourly_rate: Decimal::from(15),
    ///     overtime_rate: Decimal::new(225, 1),
    ///     tax_code: None,
    /// };
    /// assert_eq!(employee.effective_tax_code("1257L"), "1257L");
    /// ```
    pub fn effective_tax_code<'a>(&'a self, default_code: &'a str) -> &'a str {
        match self.tax_code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code,
            _ => default_code,
        }
    }
}
