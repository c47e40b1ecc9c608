//! Pag-IBIG employee share.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::rounding::round2;

/// Salaries at or below this contribute at the 1% rate.
const LOW_RATE_SALARY_CAP: Decimal = dec!(1500);

/// Pag-IBIG employee share for a basic salary.
///
/// 1% of salary at or below 1,500, otherwise 2%, with no contribution cap.
/// Non-positive salaries contribute nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::pagibig_employee_share;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(pagibig_employee_share(dec!(1500)), dec!(15.00));
/// assert_eq!(pagibig_employee_share(dec!(20000)), dec!(400.00));
/// ```
pub fn pagibig_employee_share(monthly_basic_salary: Decimal) -> Decimal {
    if monthly_basic_salary <= Decimal::ZERO {
        return round2(Decimal::ZERO);
    }
    let rate = if monthly_basic_salary <= LOW_RATE_SALARY_CAP {
        dec!(0.01)
    } else {
        dec!(0.02)
    };
    round2(monthly_basic_salary * rate)
}
