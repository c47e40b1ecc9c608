//! Persistence for computed payroll records.
//!
//! The record log is an append-only CSV file owned by this crate: a header
//! row is written once when the file is first created, every append adds one
//! row, and nothing is ever updated or deleted in place. Corrections are new
//! computations appended later, so queries can return several rows for the
//! same employee and month. Payslip rendering turns one stored row back into
//! the fixed text layout handed to employees.

mod payslip;
mod record_log;

pub use payslip::{format_money, format_payslip};
pub use record_log::PayrollStore;
