//! INSS social contribution, accumulated across progressive brackets.
//!
//! Each bracket taxes only the slice of the base that falls inside it:
//!
//! | Bracket | Slice | Rate |
//! |---------|-------|------|
//! | 1 | up to R$ 1.412,00 | 7.5% |
//! | 2 | R$ 1.412,01 to R$ 2.666,68 | 9% |
//! | 3 | R$ 2.666,69 to R$ 4.000,03 | 12% |
//! | 4 | R$ 4.000,04 to R$ 7.786,02 | 14% |
//!
//! The sum is capped at the monthly ceiling and returned as a negative amount.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use clt_pj_core::calculations::inss::inss_contribution;
//!
//! // 1412.00 × 7.5% + (2000.00 − 1412.00) × 9%
//! assert_eq!(inss_contribution(dec!(2000.00)), dec!(-158.82));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::tables::{INSS_BRACKETS, INSS_CEILING};
use crate::models::ProgressiveBracket;

/// Employee INSS on a monthly base using the 2024 table and ceiling.
pub fn inss_contribution(base: Decimal) -> Decimal {
    accumulated_contribution(base, &INSS_BRACKETS, INSS_CEILING)
}

/// Accumulates `brackets` over `base`, caps the total at `ceiling` and returns
/// it negated.
///
/// A base exactly equal to a bracket limit does not exceed that bracket, so it
/// is charged as a partial slice and the walk stops there. A base above every
/// limit is charged the full table.
pub fn accumulated_contribution(
    base: Decimal,
    brackets: &[ProgressiveBracket],
    ceiling: Decimal,
) -> Decimal {
    let mut total = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for bracket in brackets {
        if base > bracket.limit {
            total += (bracket.limit - previous_limit) * bracket.rate;
            previous_limit = bracket.limit;
        } else {
            total += (base - previous_limit) * bracket.rate;
            break;
        }
    }

    if total > ceiling {
        debug!(base = %base, total = %total, ceiling = %ceiling, "contribution capped at ceiling");
        return -ceiling;
    }

    -total
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn base_at_first_limit_is_charged_entirely_at_first_rate() {
        let result = inss_contribution(dec!(1412.00));

        assert_eq!(result, dec!(-105.90));
    }

    #[test]
    fn base_inside_first_bracket_is_a_single_partial_slice() {
        let result = inss_contribution(dec!(1000.00));

        assert_eq!(result, dec!(-75.00));
    }

    #[test]
    fn base_at_second_limit_routes_through_partial_branch() {
        // 105.90 + (2666.68 − 1412.00) × 9%
        let result = inss_contribution(dec!(2666.68));

        assert_eq!(result, dec!(-218.8212));
    }

    #[test]
    fn base_in_third_bracket_accumulates_lower_brackets() {
        // 105.90 + 112.9212 + (3500.00 − 2666.68) × 12%
        let result = inss_contribution(dec!(3500.00));

        assert_eq!(result, dec!(-318.8196));
    }

    #[test]
    fn base_just_below_top_limit_is_not_capped() {
        let result = inss_contribution(dec!(7700.00));

        // 378.8232 + (7700.00 − 4000.03) × 14%
        assert_eq!(result, dec!(-896.8190));
    }

    #[test]
    fn base_above_every_limit_is_capped_at_ceiling() {
        let result = inss_contribution(dec!(8500.00));

        assert_eq!(result, -INSS_CEILING);
    }

    #[test]
    fn zero_base_contributes_nothing() {
        let result = inss_contribution(Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn walk_stops_at_first_unexceeded_bracket() {
        // A later bracket with a lower limit must never be reached.
        let brackets = [
            ProgressiveBracket { limit: dec!(100), rate: dec!(0.10) },
            ProgressiveBracket { limit: dec!(50), rate: dec!(1.00) },
        ];

        let result = accumulated_contribution(dec!(80), &brackets, dec!(1000));

        assert_eq!(result, dec!(-8.00));
    }

    #[test]
    fn base_beyond_table_sums_every_bracket_before_capping() {
        let brackets = [
            ProgressiveBracket { limit: dec!(100), rate: dec!(0.10) },
            ProgressiveBracket { limit: dec!(200), rate: dec!(0.20) },
        ];

        let uncapped = accumulated_contribution(dec!(10000), &brackets, dec!(1000));
        let capped = accumulated_contribution(dec!(10000), &brackets, dec!(25));

        assert_eq!(uncapped, dec!(-30.00));
        assert_eq!(capped, dec!(-25));
    }

    #[test]
    fn empty_table_contributes_nothing() {
        let result = accumulated_contribution(dec!(5000), &[], INSS_CEILING);

        assert_eq!(result, Decimal::ZERO);
    }
}
