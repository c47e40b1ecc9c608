//! Day-level timecard view.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::calculation::round2;
use crate::models::{AttendanceEntry, PayMonth};

use super::summary::late_minutes;

/// One display row of an employee's monthly timecard.
///
/// Unlike the monthly rollup, the timecard is a raw view: a re-logged date
/// appears once per entry rather than deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimecardRow {
    /// The date worked.
    pub date: NaiveDate,
    /// Clock-in time.
    pub time_in: NaiveTime,
    /// Clock-out time.
    pub time_out: NaiveTime,
    /// Chargeable late minutes for this entry.
    pub late_minutes: i64,
    /// Hours worked, rounded to two decimals for display.
    pub worked_hours: Decimal,
}

/// Builds the timecard rows for one employee and month, sorted by date.
pub fn timecard_rows(
    employee_id: &str,
    month: PayMonth,
    entries: &[AttendanceEntry],
) -> Vec<TimecardRow> {
    let mut rows: Vec<TimecardRow> = entries
        .iter()
        .filter(|entry| entry.is_for(employee_id, month))
        .map(|entry| TimecardRow {
            date: entry.date,
            time_in: entry.time_in,
            time_out: entry.time_out,
            late_minutes: late_minutes(entry.time_in),
            worked_hours: round2(entry.worked_hours()),
        })
        .collect();
    rows.sort_by_key(|row| (row.date, row.time_in));
    rows
}
