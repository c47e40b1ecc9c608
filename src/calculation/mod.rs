//! Calculation logic for the payroll engine.
//!
//! This module contains the monthly payroll pipeline and the rule tables it
//! draws on: half-up monetary rounding, the SSS contribution schedule, the
//! PhilHealth premium split, the Pag-IBIG employee share, and the progressive
//! withholding tax table. Statutory deductions are always computed from the
//! monthly basic salary, never from gross pay.

mod pagibig;
mod payroll;
mod philhealth;
mod rounding;
mod sss;
mod withholding;

pub use pagibig::pagibig_employee_share;
pub use payroll::compute_monthly_payroll;
pub use philhealth::{philhealth_employee_share, philhealth_premium};
pub use rounding::round2;
pub use sss::{SSS_TABLE, SssBracket, sss_contribution};
pub use withholding::{TAX_TABLE, TaxBracket, withholding_tax};
