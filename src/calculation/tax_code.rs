//! Tax code interpretation.
//!
//! The personal allowance starts from the tax table's standard figure. A
//! tax code is carried as a label on the result; only when the scheme opts
//! in with `allowance_from_tax_code` does a cumulative `L` code replace the
//! standard allowance with its digits times ten (`1257L` means 12,570).
//! Codes of any other shape always fall back to the standard allowance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized tax code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCode {
    /// The normalized code (upper case, trimmed).
    pub code: String,
    /// Annual allowance implied by a `<digits>L` code, if the code has that shape.
    pub coded_allowance: Option<Decimal>,
}

impl TaxCode {
    /// The allowance the calculation starts from.
    ///
    /// Uses the coded allowance only when `use_coded_allowance` is set and
    /// the code carries one; otherwise the table's `standard` figure.
    pub fn base_allowance(&self, standard: Decimal, use_coded_allowance: bool) -> Decimal {
        match self.coded_allowance {
            Some(allowance) if use_coded_allowance => allowance,
            _ => standard,
        }
    }
}

/// Normalizes a tax code and reads the allowance from `<digits>L` codes.
///
/// Never fails: codes such as `BR`, `K475` or `1257L W1` are kept as labels
/// with no coded allowance.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_tax_code;
/// use rust_decimal::Decimal;
///
/// let code = parse_tax_code("1257L");
/// assert_eq!(code.coded_allowance, Some(Decimal::from(12570)));
///
/// let emergency = parse_tax_code("1257L W1");
/// assert_eq!(emergency.coded_allowance, None);
/// assert_eq!(emergency.base_allowance(Decimal::from(12570), true), Decimal::from(12570));
/// ```
pub fn parse_tax_code(raw: &str) -> TaxCode {
    let code = raw.trim().to_ascii_uppercase();

    let coded_allowance = code
        .strip_suffix('L')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<i64>().ok())
        .map(|units| Decimal::from(units) * Decimal::from(10));

    TaxCode {
        code,
        coded_allowance,
    }
}
