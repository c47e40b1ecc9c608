//! SSS contribution schedule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One row of the SSS contribution schedule.
///
/// Rows tile the salary domain as half-open `[lower, upper)` bands evaluated
/// in ascending order; the ceiling row is open-ended. Between the floor and
/// the ceiling the bands are 500 wide and the contribution steps by 22.50
/// per band. The enumerated table is authoritative; boundary values are
/// taken from it as published, not derived at runtime.
#[derive(Debug, Clone, Copy)]
pub struct SssBracket {
    /// Inclusive lower salary bound of the band.
    pub lower: Decimal,
    /// Exclusive upper salary bound; `None` for the open-ended ceiling band.
    pub upper: Option<Decimal>,
    /// Monthly employee contribution inside the band.
    pub contribution: Decimal,
}

const fn band(lower: Decimal, upper: Decimal, contribution: Decimal) -> SssBracket {
    SssBracket {
        lower,
        upper: Some(upper),
        contribution,
    }
}

const CEILING_CONTRIBUTION: Decimal = dec!(1125.00);

/// The monthly SSS contribution schedule, floor row first.
pub static SSS_TABLE: [SssBracket; 45] = [
    band(Decimal::ZERO, dec!(3250), dec!(135.00)),
    band(dec!(3250), dec!(3750), dec!(157.50)),
    band(dec!(3750), dec!(4250), dec!(180.00)),
    band(dec!(4250), dec!(4750), dec!(202.50)),
    band(dec!(4750), dec!(5250), dec!(225.00)),
    band(dec!(5250), dec!(5750), dec!(247.50)),
    band(dec!(5750), dec!(6250), dec!(270.00)),
    band(dec!(6250), dec!(6750), dec!(292.50)),
    band(dec!(6750), dec!(7250), dec!(315.00)),
    band(dec!(7250), dec!(7750), dec!(337.50)),
    band(dec!(7750), dec!(8250), dec!(360.00)),
    band(dec!(8250), dec!(8750), dec!(382.50)),
    band(dec!(8750), dec!(9250), dec!(405.00)),
    band(dec!(9250), dec!(9750), dec!(427.50)),
    band(dec!(9750), dec!(10250), dec!(450.00)),
    band(dec!(10250), dec!(10750), dec!(472.50)),
    band(dec!(10750), dec!(11250), dec!(495.00)),
    band(dec!(11250), dec!(11750), dec!(517.50)),
    band(dec!(11750), dec!(12250), dec!(540.00)),
    band(dec!(12250), dec!(12750), dec!(562.50)),
    band(dec!(12750), dec!(13250), dec!(585.00)),
    band(dec!(13250), dec!(13750), dec!(607.50)),
    band(dec!(13750), dec!(14250), dec!(630.00)),
    band(dec!(14250), dec!(14750), dec!(652.50)),
    band(dec!(14750), dec!(15250), dec!(675.00)),
    band(dec!(15250), dec!(15750), dec!(697.50)),
    band(dec!(15750), dec!(16250), dec!(720.00)),
    band(dec!(16250), dec!(16750), dec!(742.50)),
    band(dec!(16750), dec!(17250), dec!(765.00)),
    band(dec!(17250), dec!(17750), dec!(787.50)),
    band(dec!(17750), dec!(18250), dec!(810.00)),
    band(dec!(18250), dec!(18750), dec!(832.50)),
    band(dec!(18750), dec!(19250), dec!(855.00)),
    band(dec!(19250), dec!(19750), dec!(877.50)),
    band(dec!(19750), dec!(20250), dec!(900.00)),
    band(dec!(20250), dec!(20750), dec!(922.50)),
    band(dec!(20750), dec!(21250), dec!(945.00)),
    band(dec!(21250), dec!(21750), dec!(967.50)),
    band(dec!(21750), dec!(22250), dec!(990.00)),
    band(dec!(22250), dec!(22750), dec!(1012.50)),
    band(dec!(22750), dec!(23250), dec!(1035.00)),
    band(dec!(23250), dec!(23750), dec!(1057.50)),
    band(dec!(23750), dec!(24250), dec!(1080.00)),
    band(dec!(24250), dec!(24750), dec!(1102.50)),
    SssBracket {
        lower: dec!(24750),
        upper: None,
        contribution: CEILING_CONTRIBUTION,
    },
];

/// Monthly SSS contribution for a basic salary.
///
/// Looks up the first band of [`SSS_TABLE`] containing the salary. Salaries
/// below the first band boundary pay the floor contribution and salaries at
/// or above 24,750 pay the ceiling, so every input maps to a band.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::sss_contribution;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(sss_contribution(dec!(3249.99)), dec!(135.00));
/// assert_eq!(sss_contribution(dec!(20000)), dec!(900.00));
/// assert_eq!(sss_contribution(dec!(100000)), dec!(1125.00));
/// ```
pub fn sss_contribution(monthly_basic_salary: Decimal) -> Decimal {
    SSS_TABLE
        .iter()
        .find(|bracket| match bracket.upper {
            Some(upper) => monthly_basic_salary < upper,
            None => true,
        })
        .map_or(CEILING_CONTRIBUTION, |bracket| bracket.contribution)
}
