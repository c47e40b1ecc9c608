//! Append-only CSV log of payroll records.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayMonth, PayrollRecord};

// Log header, in the exact order `PayrollRecord` serializes its fields.
const COLUMNS: [&str; 16] = [
    "Employee #",
    "Employee Name",
    "Month",
    "Days Present",
    "Late Minutes",
    "Late Deduction",
    "Basic Earned",
    "Allowances Earned",
    "Gross Pay",
    "SSS",
    "PhilHealth",
    "Pag-IBIG",
    "Total Gov",
    "Taxable Income",
    "Withholding Tax",
    "Net Pay",
];

/// Append-only store for computed payroll records.
///
/// Each append opens, writes one row, and closes, so within a process rows
/// land in call order. Queries re-read the whole file; no cache is held
/// between calls. A missing log is created, parent directories included,
/// with its header row on first touch, whether that touch is an append or
/// a query.
#[derive(Debug, Clone)]
pub struct PayrollStore {
    path: PathBuf,
}

impl PayrollStore {
    /// Creates a store over the given log file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        PayrollStore { path: path.into() }
    }

    /// Appends one record to the log.
    ///
    /// If the file is absent or empty the header row is written first.
    pub fn append(&self, record: &PayrollRecord) -> PayrollResult<()> {
        let needs_header = self.needs_header()?;
        let file = self.open_for_append()?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer
                .write_record(COLUMNS)
                .map_err(|source| self.csv_error(source))?;
        }
        writer
            .serialize(record)
            .map_err(|source| self.csv_error(source))?;
        writer.flush().map_err(|source| self.io_error(source))?;
        debug!(
            path = %self.path.display(),
            employee_id = %record.employee_id,
            month = %record.month,
            "appended payroll record"
        );
        Ok(())
    }

    /// Reads every record in the log, in file order.
    ///
    /// A missing or empty log is created with its header and reads as no
    /// records. Rows that no longer deserialize are skipped, matching the
    /// exclusion policy applied to attendance data.
    pub fn read_all(&self) -> PayrollResult<Vec<PayrollRecord>> {
        if self.needs_header()? {
            self.write_header()?;
            return Ok(Vec::new());
        }
        let file = File::open(&self.path).map_err(|source| self.io_error(source))?;
        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        let mut dropped = 0usize;
        for row in reader.deserialize() {
            match row {
                Ok(record) => records.push(record),
                Err(error) if error.is_io_error() => return Err(self.csv_error(error)),
                Err(_) => dropped += 1,
            }
        }
        debug!(
            path = %self.path.display(),
            count = records.len(),
            dropped,
            "read payroll log"
        );
        Ok(records)
    }

    /// Returns all historical records for one employee and month, in file
    /// order. Several rows for the same pair are expected when a month was
    /// recomputed.
    pub fn find_for_employee_month(
        &self,
        employee_id: &str,
        month: PayMonth,
    ) -> PayrollResult<Vec<PayrollRecord>> {
        let mut records = self.read_all()?;
        records.retain(|record| record.employee_id == employee_id && record.month == month);
        Ok(records)
    }

    /// Returns the employee's record with the chronologically greatest month,
    /// or `None` if the employee has no rows. Ties on the month resolve to
    /// the row appended last.
    pub fn find_latest_for_employee(
        &self,
        employee_id: &str,
    ) -> PayrollResult<Option<PayrollRecord>> {
        let mut latest: Option<PayrollRecord> = None;
        for record in self.read_all()? {
            if record.employee_id != employee_id {
                continue;
            }
            match &latest {
                Some(best) if record.month < best.month => {}
                _ => latest = Some(record),
            }
        }
        Ok(latest)
    }

    fn needs_header(&self) -> PayrollResult<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn write_header(&self) -> PayrollResult<()> {
        let file = self.open_for_append()?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(COLUMNS)
            .map_err(|source| self.csv_error(source))?;
        writer.flush().map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), "created payroll log with header");
        Ok(())
    }

    fn open_for_append(&self) -> PayrollResult<File> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> PayrollError {
        PayrollError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> PayrollError {
        PayrollError::Csv {
            path: self.path.display().to_string(),
            source,
        }
    }
}
