//! Half-up monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value half-up to two decimal places.
///
/// Every stored field of a payroll record passes through this as it is
/// produced, so downstream stages always consume already-rounded values.
/// The result carries exactly two decimal digits, which keeps serialized
/// money in the `x.yy` form.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round2;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round2(dec!(185.18505)).to_string(), "185.19");
/// assert_eq!(round2(dec!(1600)).to_string(), "1600.00");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
