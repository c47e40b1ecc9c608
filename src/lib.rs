//! Monthly Payroll Computation Engine
//!
//! This crate turns raw daily attendance logs plus an employee's compensation
//! profile into fully itemized monthly payroll records (gross pay, statutory
//! deductions, withholding tax, net pay) and keeps every computed record in an
//! append-only history.

#![warn(missing_docs)]

pub mod attendance;
pub mod calculation;
pub mod directory;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
