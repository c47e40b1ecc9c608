//! Attendance entry model.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayMonth;

/// One completed workday for one employee.
///
/// Entries are derived by parsing raw attendance rows; they are ephemeral
/// (recomputed on each query) and never mutated. The reader guarantees that
/// `time_out` is chronologically after `time_in`; rows violating that are
/// dropped before an entry is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The employee the entry belongs to.
    pub employee_id: String,
    /// The date worked.
    pub date: NaiveDate,
    /// Clock-in time.
    pub time_in: NaiveTime,
    /// Clock-out time, after `time_in`.
    pub time_out: NaiveTime,
}

impl AttendanceEntry {
    /// Returns true if the entry belongs to the employee and falls within
    /// the month.
    pub fn is_for(&self, employee_id: &str, month: PayMonth) -> bool {
        self.employee_id == employee_id && month.contains(self.date)
    }

    /// Hours worked on this entry's day.
    ///
    /// Computed as `max(0, whole minutes between time-in and time-out) / 60`.
    /// Used for day-level display; the monthly rollup does not consume it.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceEntry;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = AttendanceEntry {
    ///     employee_id: "10001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    ///     time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     time_out: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
    /// };
    /// assert_eq!(entry.worked_hours(), Decimal::new(95, 1)); // 9.5 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let worked_minutes = (self.time_out - self.time_in).num_minutes();
        Decimal::new(worked_minutes.max(0), 0) / Decimal::new(60, 0)
    }
}
