//! Timesheet aggregation.
//!
//! Turns logged [`TimeEntry`] values into the weekly totals the monthly
//! calculation consumes, and converts between decimal hours and the
//! `"Xh Ym"` form shown on timesheets.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::TimeEntry;

/// Hours worked in one ISO week of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTotal {
    /// ISO week-numbering year.
    pub iso_year: i32,
    /// ISO week number (1-53).
    pub iso_week: u32,
    /// Monday of the week, which may fall in the previous month.
    pub week_start: NaiveDate,
    /// Hours worked in the week, counting only days inside the month.
    pub hours: Decimal,
    /// `hours` formatted as `"Xh Ym"`.
    pub formatted: String,
}

/// A month's timesheet, aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetSummary {
    /// First day of the summarized month.
    pub month_start: NaiveDate,
    /// Number of entries that fell inside the month.
    pub entry_count: usize,
    /// Per-week totals in chronological order.
    pub weeks: Vec<WeeklyTotal>,
    /// Sum of all weekly totals.
    pub total_hours: Decimal,
    /// `total_hours` formatted as `"Xh Ym"`.
    pub formatted_total: String,
}

fn in_month(date: NaiveDate, month: NaiveDate) -> bool {
    date.year() == month.year() && date.month() == month.month()
}

fn group_by_week(
    entries: &[TimeEntry],
    month: NaiveDate,
) -> EngineResult<(BTreeMap<(i32, u32), (NaiveDate, Decimal)>, usize)> {
    let mut weeks: BTreeMap<(i32, u32), (NaiveDate, Decimal)> = BTreeMap::new();
    let mut count = 0;

    for entry in entries.iter().filter(|e| in_month(e.date, month)) {
        let hours = entry.worked_hours()?;
        let week = entry.date.iso_week();
        let monday =
            entry.date - Duration::days(i64::from(entry.date.weekday().num_days_from_monday()));

        let slot = weeks
            .entry((week.year(), week.week()))
            .or_insert((monday, Decimal::ZERO));
        slot.1 += hours;
        count += 1;
    }

    Ok((weeks, count))
}

/// Sums worked hours per ISO week for the month containing `month`.
///
/// Entries outside the month are ignored. Weeks with no entries are not
/// represented, so an empty month yields an empty vector.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::weekly_hours_for_month;
/// use payroll_engine::models::TimeEntry;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let entry = |id: &str, day: u32| TimeEntry {
///     id: id.to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_minutes: 0,
///     description: None,
/// };
///
/// // 13th and 14th share a week; the 20th starts the next one
/// let entries = vec![entry("a", 13), entry("b", 14), entry("c", 20)];
/// let month = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
///
/// let weeks = weekly_hours_for_month(&entries, month).unwrap();
/// assert_eq!(weeks, vec![Decimal::from(16), Decimal::from(8)]);
/// ```
pub fn weekly_hours_for_month(entries: &[TimeEntry], month: NaiveDate) -> EngineResult<Vec<Decimal>> {
    let (weeks, _) = group_by_week(entries, month)?;
    Ok(weeks.into_values().map(|(_, hours)| hours).collect())
}

/// Builds the [`TimesheetSummary`] for the month containing `month`.
pub fn summarize_timesheet(entries: &[TimeEntry], month: NaiveDate) -> EngineResult<TimesheetSummary> {
    let (grouped, entry_count) = group_by_week(entries, month)?;

    let weeks: Vec<WeeklyTotal> = grouped
        .into_iter()
        .map(|((iso_year, iso_week), (week_start, hours))| WeeklyTotal {
            iso_year,
            iso_week,
            week_start,
            formatted: format_duration(hours),
            hours,
        })
        .collect();

    let total_hours: Decimal = weeks.iter().map(|w| w.hours).sum();
    let month_start = month.with_day(1).unwrap_or(month);

    Ok(TimesheetSummary {
        month_start,
        entry_count,
        weeks,
        formatted_total: format_duration(total_hours),
        total_hours,
    })
}

/// Formats decimal hours as `"Xh Ym"`, rounding to the nearest minute.
///
/// ```
/// use payroll_engine::calculation::format_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_duration(Decimal::new(75, 1)), "7h 30m");
/// assert_eq!(format_duration(Decimal::ZERO), "0h 0m");
/// ```
pub fn format_duration(hours: Decimal) -> String {
    let sign = if hours < Decimal::ZERO { "-" } else { "" };
    let total_minutes = (hours.abs() * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let whole_hours = (total_minutes / Decimal::from(60)).floor();
    let minutes = total_minutes - whole_hours * Decimal::from(60);

    format!("{}{}h {}m", sign, whole_hours.normalize(), minutes.normalize())
}

/// Parses `"Xh Ym"` (or a bare `"Xh"`) into decimal hours.
///
/// Minutes must be below 60.
///
/// ```
/// use payroll_engine::calculation::parse_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_duration("7h 30m").unwrap(), Decimal::new(75, 1));
/// assert_eq!(parse_duration("8h").unwrap(), Decimal::from(8));
/// assert!(parse_duration("7.5").is_err());
/// ```
pub fn parse_duration(value: &str) -> EngineResult<Decimal> {
    let invalid = || EngineError::InvalidDuration {
        value: value.to_string(),
    };

    let mut parts = value.split_whitespace();
    let hours = parts
        .next()
        .and_then(|p| p.strip_suffix('h'))
        .and_then(parse_digits)
        .ok_or_else(invalid)?;

    let minutes = match parts.next() {
        Some(part) => part
            .strip_suffix('m')
            .and_then(parse_digits)
            .filter(|m| *m < 60)
            .ok_or_else(invalid)?,
        None => 0,
    };

    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(60))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
