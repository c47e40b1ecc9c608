//! Attendance CSV reader.

use std::fs::File;
use std::path::PathBuf;

use csv::StringRecord;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceEntry, PayMonth};

use super::parse::{parse_date, parse_time};

// Header names the timecard sources have been seen to use, lowercased.
const EMPLOYEE_COLUMN: [&str; 3] = ["employee #", "employee no", "employee number"];
const DATE_COLUMN: [&str; 2] = ["date", "log date"];
const TIME_IN_COLUMN: [&str; 3] = ["log in", "time in", "login"];
const TIME_OUT_COLUMN: [&str; 3] = ["log out", "time out", "logout"];

/// Reader over the timecard collaborator's attendance file.
///
/// The file is consumed read-only: a missing file reads as empty and is
/// never created here. Header names are matched case-insensitively against
/// the known variants, and rows that fail to parse are dropped silently;
/// attendance data is assumed imperfect and must not block payroll.
#[derive(Debug, Clone)]
pub struct AttendanceLog {
    path: PathBuf,
}

impl AttendanceLog {
    /// Creates a reader over the given attendance file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        AttendanceLog { path: path.into() }
    }

    /// Loads every well-formed entry in the file.
    ///
    /// Rows whose date or times fail every accepted pattern, or whose
    /// time-out does not come after the time-in, are dropped. Only
    /// filesystem-level failures surface as errors.
    pub fn load_entries(&self) -> PayrollResult<Vec<AttendanceEntry>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "attendance file absent, reading as empty");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|source| PayrollError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let headers = reader
            .headers()
            .map_err(|source| PayrollError::Csv {
                path: self.path.display().to_string(),
                source,
            })?
            .clone();

        let Some(columns) = ColumnMap::resolve(&headers) else {
            debug!(path = %self.path.display(), "attendance header lacks required columns");
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        let mut dropped = 0usize;
        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(error) if error.is_io_error() => {
                    return Err(PayrollError::Csv {
                        path: self.path.display().to_string(),
                        source: error,
                    });
                }
                Err(_) => {
                    dropped += 1;
                    continue;
                }
            };
            match columns.entry_from(&row) {
                Some(entry) => entries.push(entry),
                None => dropped += 1,
            }
        }

        debug!(
            path = %self.path.display(),
            count = entries.len(),
            dropped,
            "loaded attendance entries"
        );
        Ok(entries)
    }

    /// Loads the entries belonging to one employee and month.
    pub fn entries_for(
        &self,
        employee_id: &str,
        month: PayMonth,
    ) -> PayrollResult<Vec<AttendanceEntry>> {
        let mut entries = self.load_entries()?;
        entries.retain(|entry| entry.is_for(employee_id, month));
        Ok(entries)
    }
}

struct ColumnMap {
    employee: usize,
    date: usize,
    time_in: usize,
    time_out: usize,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Option<Self> {
        Some(ColumnMap {
            employee: find_column(headers, &EMPLOYEE_COLUMN)?,
            date: find_column(headers, &DATE_COLUMN)?,
            time_in: find_column(headers, &TIME_IN_COLUMN)?,
            time_out: find_column(headers, &TIME_OUT_COLUMN)?,
        })
    }

    fn entry_from(&self, row: &StringRecord) -> Option<AttendanceEntry> {
        let employee_id = row.get(self.employee)?.trim();
        if employee_id.is_empty() {
            return None;
        }
        let date = parse_date(row.get(self.date)?)?;
        let time_in = parse_time(row.get(self.time_in)?)?;
        let time_out = parse_time(row.get(self.time_out)?)?;
        if time_out <= time_in {
            return None;
        }
        Some(AttendanceEntry {
            employee_id: employee_id.to_string(),
            date,
            time_in,
            time_out,
        })
    }
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().to_lowercase();
        names.iter().any(|name| header == *name)
    })
}
