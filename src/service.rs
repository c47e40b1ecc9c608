//! High-level payroll orchestration.
//!
//! [`PayrollService`] wires the attendance reader, the calculator, and the
//! record store into the operations callers actually run: compute one
//! employee's month, run a whole month in batch, save and query records.
//! Computation and persistence stay separate: a batch run computes records
//! but never appends them, and the caller decides what to save.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::attendance::{AttendanceLog, TimecardRow, summarize, timecard_rows};
use crate::calculation::{compute_monthly_payroll, round2};
use crate::error::PayrollResult;
use crate::models::{CompensationProfile, PayMonth, PayrollRecord};
use crate::store::PayrollStore;

/// What to do when an employee has no attendance in the requested month.
///
/// Zero attendance is valid input to the calculator, so this is a policy
/// choice for the caller, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroAttendancePolicy {
    /// Produce no record for the month.
    #[default]
    Skip,
    /// Produce a record with zero days present and zero late minutes.
    ComputeAnyway,
}

/// Outcome of one batch payroll run.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRunSummary {
    /// The month the run covered.
    pub month: PayMonth,
    /// Computed records, in the order the profiles were given.
    pub records: Vec<PayrollRecord>,
    /// Employee numbers skipped for lack of attendance.
    pub skipped_no_attendance: Vec<String>,
}

impl MonthlyRunSummary {
    /// Sum of statutory deductions across the run.
    pub fn total_deductions(&self) -> Decimal {
        round2(
            self.records
                .iter()
                .map(|record| record.total_deductions_before_tax)
                .sum(),
        )
    }

    /// Sum of withholding tax across the run.
    pub fn total_withholding_tax(&self) -> Decimal {
        round2(
            self.records
                .iter()
                .map(|record| record.withholding_tax)
                .sum(),
        )
    }

    /// Sum of net pay across the run.
    pub fn total_net_pay(&self) -> Decimal {
        round2(self.records.iter().map(|record| record.net_pay).sum())
    }
}

/// Facade over attendance aggregation, payroll calculation, and the record
/// log.
#[derive(Debug, Clone)]
pub struct PayrollService {
    attendance: AttendanceLog,
    store: PayrollStore,
}

impl PayrollService {
    /// Creates a service over an attendance reader and a record store.
    pub fn new(attendance: AttendanceLog, store: PayrollStore) -> Self {
        PayrollService { attendance, store }
    }

    /// Computes one employee's payroll for one month from file attendance.
    ///
    /// Returns `Ok(None)` when the employee has no attendance in the month
    /// and the policy says to skip. The computed record is not persisted;
    /// pass it to [`save_record`](Self::save_record) to append it.
    pub fn compute_for_employee_month(
        &self,
        profile: &CompensationProfile,
        month: PayMonth,
        policy: ZeroAttendancePolicy,
    ) -> PayrollResult<Option<PayrollRecord>> {
        let entries = self.attendance.load_entries()?;
        let summary = summarize(&profile.employee_id, month, &entries);
        if summary.days_present == 0 && policy == ZeroAttendancePolicy::Skip {
            warn!(
                employee_id = %profile.employee_id,
                %month,
                "no attendance for month, skipping computation"
            );
            return Ok(None);
        }
        Ok(Some(compute_monthly_payroll(
            profile,
            month,
            summary.days_present,
            summary.total_late_minutes,
        )))
    }

    /// Computes payroll for every given profile in one month.
    ///
    /// The attendance file is read once for the whole run. Records are
    /// computed only, nothing is appended to the log.
    pub fn run_month(
        &self,
        profiles: &[CompensationProfile],
        month: PayMonth,
        policy: ZeroAttendancePolicy,
    ) -> PayrollResult<MonthlyRunSummary> {
        let entries = self.attendance.load_entries()?;
        let mut records = Vec::new();
        let mut skipped_no_attendance = Vec::new();
        for profile in profiles {
            let summary = summarize(&profile.employee_id, month, &entries);
            if summary.days_present == 0 && policy == ZeroAttendancePolicy::Skip {
                skipped_no_attendance.push(profile.employee_id.clone());
                continue;
            }
            records.push(compute_monthly_payroll(
                profile,
                month,
                summary.days_present,
                summary.total_late_minutes,
            ));
        }
        info!(
            %month,
            computed = records.len(),
            skipped = skipped_no_attendance.len(),
            "monthly payroll run finished"
        );
        Ok(MonthlyRunSummary {
            month,
            records,
            skipped_no_attendance,
        })
    }

    /// Day-by-day timecard for one employee and month, sorted by date.
    pub fn timecard(&self, employee_id: &str, month: PayMonth) -> PayrollResult<Vec<TimecardRow>> {
        let entries = self.attendance.load_entries()?;
        Ok(timecard_rows(employee_id, month, &entries))
    }

    /// Appends a computed record to the payroll log.
    pub fn save_record(&self, record: &PayrollRecord) -> PayrollResult<()> {
        self.store.append(record)
    }

    /// All saved records for one employee and month, in file order.
    pub fn records_for_employee_month(
        &self,
        employee_id: &str,
        month: PayMonth,
    ) -> PayrollResult<Vec<PayrollRecord>> {
        self.store.find_for_employee_month(employee_id, month)
    }

    /// The employee's saved record with the greatest month, if any.
    pub fn latest_for_employee(&self, employee_id: &str) -> PayrollResult<Option<PayrollRecord>> {
        self.store.find_latest_for_employee(employee_id)
    }
}
