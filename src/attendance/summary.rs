//! Monthly attendance rollup.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::models::{AttendanceEntry, PayMonth};

/// Shift start in minutes from midnight (08:00).
pub const SHIFT_START_MINUTES: i64 = 8 * 60;

/// Grace period length in minutes; a time-in at or before 08:10 is on time.
pub const GRACE_PERIOD_MINUTES: i64 = 10;

/// The reduced attendance figures for one employee and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    /// Count of distinct dates with both a time-in and a time-out.
    pub days_present: u32,
    /// Sum of per-day chargeable late minutes.
    pub total_late_minutes: i64,
}

/// Chargeable late minutes for a time-in.
///
/// The grace period is a pass/fail gate, not a subtracted buffer: at or
/// before the 08:10 cutoff a time-in is on time, and one minute past the
/// cutoff charges the whole lateness since the 08:00 shift start, in whole
/// minutes.
///
/// # Examples
///
/// ```
/// use payroll_engine::attendance::late_minutes;
/// use chrono::NaiveTime;
///
/// let cutoff = NaiveTime::from_hms_opt(8, 10, 0).unwrap();
/// assert_eq!(late_minutes(cutoff), 0);
///
/// let just_late = NaiveTime::from_hms_opt(8, 11, 0).unwrap();
/// assert_eq!(late_minutes(just_late), 11);
/// ```
pub fn late_minutes(time_in: NaiveTime) -> i64 {
    let seconds_in = i64::from(time_in.num_seconds_from_midnight());
    let shift_start_seconds = SHIFT_START_MINUTES * 60;
    let cutoff_seconds = (SHIFT_START_MINUTES + GRACE_PERIOD_MINUTES) * 60;
    if seconds_in <= cutoff_seconds {
        0
    } else {
        (seconds_in - shift_start_seconds) / 60
    }
}

/// Reduces an employee's entries to the monthly attendance figures.
///
/// Entries for other employees or other months are ignored. A date counts
/// once toward `days_present` no matter how many entries land on it, and a
/// re-logged date contributes its worst (maximum) late minutes to the total.
pub fn summarize(
    employee_id: &str,
    month: PayMonth,
    entries: &[AttendanceEntry],
) -> AttendanceSummary {
    let mut late_by_date: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|entry| entry.is_for(employee_id, month))
    {
        let late = late_minutes(entry.time_in);
        late_by_date
            .entry(entry.date)
            .and_modify(|worst| *worst = (*worst).max(late))
            .or_insert(late);
    }
    AttendanceSummary {
        days_present: late_by_date.len() as u32,
        total_late_minutes: late_by_date.values().sum(),
    }
}
