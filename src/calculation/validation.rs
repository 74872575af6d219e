//! Input checks run before any arithmetic.
//!
//! The upper bounds keep every later product well inside `Decimal` range,
//! so the pure stages never overflow.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Hours in a week.
pub const MAX_WEEKLY_HOURS: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Most weeks a calendar month can overlap.
pub const MAX_WEEKS_PER_MONTH: usize = 6;

/// Highest accepted hourly or overtime rate.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Rejects negative or impossible weekly hour totals.
pub fn validate_weekly_hours(weekly_hours: &[Decimal]) -> EngineResult<()> {
    if weekly_hours.len() > MAX_WEEKS_PER_MONTH {
        return Err(EngineError::InvalidHours {
            field: "weekly_hours".to_string(),
            message: format!(
                "must not exceed {} weeks, got {}",
                MAX_WEEKS_PER_MONTH,
                weekly_hours.len()
            ),
        });
    }

    for (index, hours) in weekly_hours.iter().enumerate() {
        let message = if *hours < Decimal::ZERO {
            format!("must not be negative, got {}", hours)
        } else if *hours > MAX_WEEKLY_HOURS {
            format!("must not exceed {}, got {}", MAX_WEEKLY_HOURS, hours)
        } else {
            continue;
        };
        return Err(EngineError::InvalidHours {
            field: format!("weekly_hours[{}]", index),
            message,
        });
    }
    Ok(())
}

/// Rejects negative or out-of-range hourly and overtime rates.
pub fn validate_rates(employee: &Employee) -> EngineResult<()> {
    for (field, rate) in [
        ("hourly_rate", employee.hourly_rate),
        ("overtime_rate", employee.overtime_rate),
    ] {
        if rate < Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                field: field.to_string(),
                message: format!("must not be negative, got {}", rate),
            });
        }
        if rate > MAX_HOURLY_RATE {
            return Err(EngineError::InvalidRate {
                field: field.to_string(),
                message: format!("must not exceed {}, got {}", MAX_HOURLY_RATE, rate),
            });
        }
    }
    Ok(())
}

/// Rejects a standard-hours cap outside zero to a month of full weeks.
pub fn validate_cap(cap: Decimal) -> EngineResult<()> {
    let max_cap = MAX_WEEKLY_HOURS * Decimal::from(MAX_WEEKS_PER_MONTH as u64);
    if cap < Decimal::ZERO || cap > max_cap {
        return Err(EngineError::InvalidHours {
            field: "standard_monthly_cap_hours".to_string(),
            message: format!("must be between 0 and {}, got {}", max_cap, cap),
        });
    }
    Ok(())
}
