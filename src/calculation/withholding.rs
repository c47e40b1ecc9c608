//! Progressive withholding tax table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::rounding::round2;

/// One row of the monthly withholding tax table.
///
/// Tax inside a row is `base + (income − lower) × rate`. Rows tile the
/// taxable-income domain as half-open `[lower, upper)` intervals evaluated
/// in ascending order; the top row is open-ended.
#[derive(Debug, Clone, Copy)]
pub struct TaxBracket {
    /// Inclusive lower bound, also the excess threshold of the row.
    pub lower: Decimal,
    /// Exclusive upper bound; `None` for the open-ended top row.
    pub upper: Option<Decimal>,
    /// Tax owed at exactly `lower`.
    pub base: Decimal,
    /// Marginal rate on income above `lower`.
    pub rate: Decimal,
}

/// The monthly withholding tax table, evaluated first-match in order.
pub static TAX_TABLE: [TaxBracket; 6] = [
    TaxBracket {
        lower: Decimal::ZERO,
        upper: Some(dec!(20833)),
        base: dec!(0.00),
        rate: dec!(0),
    },
    TaxBracket {
        lower: dec!(20833),
        upper: Some(dec!(33333)),
        base: dec!(0.00),
        rate: dec!(0.20),
    },
    TaxBracket {
        lower: dec!(33333),
        upper: Some(dec!(66667)),
        base: dec!(2500.00),
        rate: dec!(0.25),
    },
    TaxBracket {
        lower: dec!(66667),
        upper: Some(dec!(166667)),
        base: dec!(10833.00),
        rate: dec!(0.30),
    },
    TaxBracket {
        lower: dec!(166667),
        upper: Some(dec!(666667)),
        base: dec!(40833.33),
        rate: dec!(0.32),
    },
    TaxBracket {
        lower: dec!(666667),
        upper: None,
        base: dec!(200833.33),
        rate: dec!(0.35),
    },
];

/// Monthly withholding tax on taxable income, rounded to centavos.
///
/// Income below the first threshold owes nothing; each later bracket charges
/// its base amount plus the marginal rate on income above the bracket's
/// lower bound.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::withholding_tax;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(withholding_tax(dec!(18400)), dec!(0.00));
/// assert_eq!(withholding_tax(dec!(20834)), dec!(0.20));
/// assert_eq!(withholding_tax(dec!(33333)), dec!(2500.00));
/// ```
pub fn withholding_tax(taxable_income: Decimal) -> Decimal {
    TAX_TABLE
        .iter()
        .find(|bracket| match bracket.upper {
            Some(upper) => taxable_income < upper,
            None => true,
        })
        .map_or(round2(Decimal::ZERO), |bracket| {
            round2(bracket.base + (taxable_income - bracket.lower) * bracket.rate)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// WT-001: nothing is withheld below the first threshold.
    #[test]
    fn test_zero_bracket() {
        assert_eq!(withholding_tax(dec!(0)), dec!(0.00));
        assert_eq!(withholding_tax(dec!(18400)), dec!(0.00));
        assert_eq!(withholding_tax(dec!(20832)), dec!(0.00));
        assert_eq!(withholding_tax(dec!(20832.50)), dec!(0.00));
    }

    /// WT-002: the 20% bracket starts at its own threshold, so the excess
    /// at exactly 20,833 is zero and the first taxed peso is 20,834.
    #[test]
    fn test_twenty_percent_bracket_threshold() {
        assert_eq!(withholding_tax(dec!(20833)), dec!(0.00));
        assert_eq!(withholding_tax(dec!(20834)), dec!(0.20));
        assert_eq!(withholding_tax(dec!(25000)), dec!(833.40));
    }

    /// WT-003: each boundary lands exactly on the next bracket's base.
    #[test]
    fn test_bracket_boundaries_hit_base_amounts() {
        assert_eq!(withholding_tax(dec!(33333)), dec!(2500.00));
        assert_eq!(withholding_tax(dec!(66667)), dec!(10833.00));
        assert_eq!(withholding_tax(dec!(166667)), dec!(40833.33));
        assert_eq!(withholding_tax(dec!(666667)), dec!(200833.33));
    }

    /// WT-004: mid-bracket amounts combine base and marginal rate.
    #[test]
    fn test_mid_bracket_amounts() {
        assert_eq!(withholding_tax(dec!(50000)), dec!(6666.75));
        assert_eq!(withholding_tax(dec!(100000)), dec!(20832.90));
        assert_eq!(withholding_tax(dec!(1000000)), dec!(317499.88));
    }

    /// WT-005: values a centavo below a boundary stay in the lower bracket.
    #[test]
    fn test_just_below_boundaries() {
        assert_eq!(withholding_tax(dec!(33332.99)), dec!(2500.00));
        assert_eq!(withholding_tax(dec!(66666.99)), dec!(10833.50));
    }

    /// WT-006: the table tiles the domain in ascending order.
    #[test]
    fn test_table_is_contiguous_and_ascending() {
        for pair in TAX_TABLE.windows(2) {
            assert_eq!(pair[0].upper, Some(pair[1].lower));
            assert!(pair[0].base <= pair[1].base);
            assert!(pair[0].rate <= pair[1].rate);
        }
        assert!(TAX_TABLE[TAX_TABLE.len() - 1].upper.is_none());
    }

    proptest! {
        #[test]
        fn tax_is_never_negative(centavos in 0i64..100_000_000_00) {
            let income = Decimal::new(centavos, 2);
            prop_assert!(withholding_tax(income) >= dec!(0));
        }

        #[test]
        fn tax_is_zero_below_first_threshold(centavos in 0i64..2_083_300) {
            let income = Decimal::new(centavos, 2);
            prop_assert_eq!(withholding_tax(income), dec!(0.00));
        }
    }
}
