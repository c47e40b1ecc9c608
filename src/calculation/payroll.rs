//! The monthly payroll pipeline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{CompensationProfile, PayMonth, PayrollRecord};

use super::pagibig::pagibig_employee_share;
use super::philhealth::philhealth_employee_share;
use super::rounding::round2;
use super::sss::sss_contribution;
use super::withholding::withholding_tax;

const MINUTES_PER_HOUR: Decimal = dec!(60);

/// Computes the itemized payroll record for one employee and month.
///
/// Pure function: no I/O, deterministic, and it trusts its numeric inputs.
/// Zero days present and zero late minutes are valid; the record is then
/// driven by basic salary and allowances alone. Whether such a record should
/// be computed or saved at all is the caller's policy, not decided here.
///
/// The stages feed each other in a fixed order: allowances, late deduction,
/// gross pay, the three statutory deductions (all taken from basic salary,
/// never from gross), taxable income, withholding tax, net pay. Each stored
/// field is rounded half-up to centavos as it is produced and later stages
/// consume the rounded values.
///
/// # Arguments
///
/// * `profile` - The employee's compensation profile; values are copied into
///   the record, so later profile edits never change it.
/// * `month` - The month the record covers.
/// * `days_present` - Distinct days with both a time-in and a time-out.
/// * `late_minutes` - Total chargeable late minutes for the month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_monthly_payroll;
/// use payroll_engine::models::CompensationProfile;
/// use rust_decimal_macros::dec;
///
/// let profile = CompensationProfile {
///     employee_id: "10001".to_string(),
///     employee_name: "Jose Crisostomo".to_string(),
///     monthly_basic_salary: dec!(20000),
///     rice_subsidy: dec!(1500),
///     phone_allowance: dec!(1000),
///     clothing_allowance: dec!(1000),
///     hourly_rate: dec!(120),
/// };
/// let record = compute_monthly_payroll(&profile, "2024-06".parse().unwrap(), 22, 30);
///
/// assert_eq!(record.gross_pay, dec!(23440.00));
/// assert_eq!(record.net_pay, dec!(21840.00));
/// ```
pub fn compute_monthly_payroll(
    profile: &CompensationProfile,
    month: PayMonth,
    days_present: u32,
    late_minutes: i64,
) -> PayrollRecord {
    let basic = round2(profile.monthly_basic_salary);
    let allowances = round2(profile.monthly_allowances());

    let late_deduction =
        round2(Decimal::from(late_minutes) / MINUTES_PER_HOUR * profile.hourly_rate);
    let gross_pay = round2((basic + allowances - late_deduction).max(Decimal::ZERO));

    let sss = sss_contribution(basic);
    let phil_health = philhealth_employee_share(basic);
    let pag_ibig = pagibig_employee_share(basic);
    let total_deductions_before_tax = round2(sss + phil_health + pag_ibig);

    let taxable_income = round2((basic - total_deductions_before_tax).max(Decimal::ZERO));
    let tax = withholding_tax(taxable_income);

    let net_pay = round2((gross_pay - total_deductions_before_tax - tax).max(Decimal::ZERO));

    PayrollRecord {
        employee_id: profile.employee_id.clone(),
        employee_name: profile.employee_name.clone(),
        month,
        days_present,
        late_minutes,
        late_deduction,
        monthly_basic_salary: basic,
        total_allowances_monthly: allowances,
        gross_pay,
        sss,
        phil_health,
        pag_ibig,
        total_deductions_before_tax,
        taxable_income,
        withholding_tax: tax,
        net_pay,
    }
}
