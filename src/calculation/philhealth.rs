//! PhilHealth premium and employee share.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::rounding::round2;

const PREMIUM_RATE: Decimal = dec!(0.03);
const PREMIUM_FLOOR: Decimal = dec!(300);
const PREMIUM_CEILING: Decimal = dec!(1800);
/// Salaries at or below this pay the floor premium outright.
const FLOOR_SALARY: Decimal = dec!(10000);
/// Salaries at or above this pay the ceiling premium outright.
const CEILING_SALARY: Decimal = dec!(60000);

/// Monthly PhilHealth premium for a basic salary.
///
/// The premium is 3% of salary, forced to exactly 300 for salaries at or
/// below 10,000 and to exactly 1,800 at or above 60,000, and clamped to the
/// 300–1,800 range in between.
pub fn philhealth_premium(monthly_basic_salary: Decimal) -> Decimal {
    if monthly_basic_salary <= FLOOR_SALARY {
        return PREMIUM_FLOOR;
    }
    if monthly_basic_salary >= CEILING_SALARY {
        return PREMIUM_CEILING;
    }
    (monthly_basic_salary * PREMIUM_RATE).clamp(PREMIUM_FLOOR, PREMIUM_CEILING)
}

/// Employee share of the PhilHealth premium (50%), rounded to centavos.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::philhealth_employee_share;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(philhealth_employee_share(dec!(10000)), dec!(150.00));
/// assert_eq!(philhealth_employee_share(dec!(30000)), dec!(450.00));
/// assert_eq!(philhealth_employee_share(dec!(60000)), dec!(900.00));
/// ```
pub fn philhealth_employee_share(monthly_basic_salary: Decimal) -> Decimal {
    round2(philhealth_premium(monthly_basic_salary) * dec!(0.5))
}
