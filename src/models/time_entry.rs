//! Time entry model.
//!
//! A [`TimeEntry`] is one logged block of work on a single day.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One logged block of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The day the work was done.
    pub date: NaiveDate,
    /// Wall-clock start time.
    pub start_time: NaiveTime,
    /// Wall-clock end time, on the same day as the start.
    pub end_time: NaiveTime,
    /// Unpaid break taken during the entry, in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Free-text note.
    #[serde(default)]
    pub description: Option<String>,
}

impl TimeEntry {
    /// Worked minutes: the span between start and end less the break.
    ///
    /// Fails when the end precedes the start or the break is longer than
    /// the span.
    pub fn worked_minutes(&self) -> EngineResult<i64> {
        let span = (self.end_time - self.start_time).num_minutes();
        if span < 0 {
            return Err(EngineError::InvalidTimeEntry {
                entry_id: self.id.clone(),
                message: format!(
                    "end time {} is before start time {}",
                    self.end_time, self.start_time
                ),
            });
        }

        let break_minutes = i64::from(self.break_minutes);
        if break_minutes > span {
            return Err(EngineError::InvalidTimeEntry {
                entry_id: self.id.clone(),
                message: format!(
                    "break of {} minutes exceeds the {} minute entry",
                    break_minutes, span
                ),
            });
        }

        Ok(span - break_minutes)
    }

    /// Worked hours as a Decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::TimeEntry;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry {
    ///     id: "te_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 5, 13).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
    ///     break_minutes: 30,
    ///     description: None,
    /// };
    /// assert_eq!(entry.worked_hours().unwrap(), Decimal::from(8));
    /// ```
    pub fn worked_hours(&self) -> EngineResult<Decimal> {
        let minutes = self.worked_minutes()?;
        Ok(Decimal::new(minutes, 0) / Decimal::new(60, 0))
    }
}
