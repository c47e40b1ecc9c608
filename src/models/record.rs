//! Computed payroll record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayMonth;

/// The fully itemized payroll result for one `(employee, month)` pair.
///
/// A record is immutable once created. History is additive: recomputing the
/// same employee and month produces a new record appended alongside the old
/// one, never a replacement.
///
/// Fields are declared in the payroll log's column order and carry the log's
/// header names as serde renames, so a record serializes directly as one log
/// row. Every monetary field is rounded half-up to two decimal places by the
/// calculator before the record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Employee number.
    #[serde(rename = "Employee #")]
    pub employee_id: String,
    /// Employee display name.
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    /// The month the record covers.
    #[serde(rename = "Month")]
    pub month: PayMonth,
    /// Distinct days with both a time-in and a time-out.
    #[serde(rename = "Days Present")]
    pub days_present: u32,
    /// Total chargeable late minutes for the month.
    #[serde(rename = "Late Minutes")]
    pub late_minutes: i64,
    /// Late minutes priced at the hourly rate.
    #[serde(rename = "Late Deduction")]
    pub late_deduction: Decimal,
    /// Monthly basic salary at computation time.
    #[serde(rename = "Basic Earned")]
    pub monthly_basic_salary: Decimal,
    /// Rice subsidy + phone allowance + clothing allowance.
    #[serde(rename = "Allowances Earned")]
    pub total_allowances_monthly: Decimal,
    /// `max(0, basic + allowances - late deduction)`.
    #[serde(rename = "Gross Pay")]
    pub gross_pay: Decimal,
    /// SSS contribution from the bracket table.
    #[serde(rename = "SSS")]
    pub sss: Decimal,
    /// PhilHealth employee share (half the premium).
    #[serde(rename = "PhilHealth")]
    pub phil_health: Decimal,
    /// Pag-IBIG employee share.
    #[serde(rename = "Pag-IBIG")]
    pub pag_ibig: Decimal,
    /// Sum of the three statutory deductions.
    #[serde(rename = "Total Gov")]
    pub total_deductions_before_tax: Decimal,
    /// `max(0, basic - total statutory deductions)`.
    #[serde(rename = "Taxable Income")]
    pub taxable_income: Decimal,
    /// Progressive withholding tax on taxable income.
    #[serde(rename = "Withholding Tax")]
    pub withholding_tax: Decimal,
    /// `max(0, gross - total statutory deductions - withholding tax)`.
    #[serde(rename = "Net Pay")]
    pub net_pay: Decimal,
}
