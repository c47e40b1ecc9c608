//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod pay_month;
mod profile;
mod record;

pub use attendance::AttendanceEntry;
pub use pay_month::PayMonth;
pub use profile::CompensationProfile;
pub use record::PayrollRecord;
