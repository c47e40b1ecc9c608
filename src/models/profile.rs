//! Compensation profile model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The slice of an employee record the payroll computation consumes.
///
/// Owned by the employee-management side; the engine reads it read-only and
/// copies the values it needs into each computed [`PayrollRecord`], so later
/// profile edits never change historical records.
///
/// [`PayrollRecord`]: super::PayrollRecord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// Employee number, the identity key of attendance rows and records.
    pub employee_id: String,
    /// Display name, `First Last`.
    pub employee_name: String,
    /// Monthly basic salary, the base of every statutory deduction.
    pub monthly_basic_salary: Decimal,
    /// Monthly rice subsidy.
    pub rice_subsidy: Decimal,
    /// Monthly phone allowance.
    pub phone_allowance: Decimal,
    /// Monthly clothing allowance.
    pub clothing_allowance: Decimal,
    /// Hourly rate used to price late minutes.
    pub hourly_rate: Decimal,
}

impl CompensationProfile {
    /// Sum of the three monthly allowances.
    pub fn monthly_allowances(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }
}
