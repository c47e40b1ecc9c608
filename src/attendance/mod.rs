//! Attendance parsing and aggregation.
//!
//! This module turns the timecard collaborator's raw CSV rows into
//! [`AttendanceEntry`](crate::models::AttendanceEntry) values, reduces a
//! month of entries to the figures the payroll pipeline consumes (days
//! present, total late minutes under the grace-period rule), and builds the
//! day-level timecard view used for display.

mod log;
mod parse;
mod summary;
mod timecard;

pub use log::AttendanceLog;
pub use parse::{DATE_FORMATS, TIME_FORMATS, parse_date, parse_time};
pub use summary::{
    AttendanceSummary, GRACE_PERIOD_MINUTES, SHIFT_START_MINUTES, late_minutes, summarize,
};
pub use timecard::{TimecardRow, timecard_rows};
