//! Shared helpers for the fiscal calculations.

use rust_decimal::Decimal;
use tracing::warn;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// The calculations themselves never round; this is for presenting amounts
/// in whole centavos.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use clt_pj_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1191.56625)), dec!(1191.57));
/// assert_eq!(round_half_up(dec!(-318.8196)), dec!(-318.82));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use clt_pj_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-12.50), Decimal::ZERO), Decimal::ZERO);
/// assert_eq!(max(dec!(3500.00), dec!(0.01)), dec!(3500.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a caller-supplied amount or rate to zero when it is negative.
///
/// Inputs are expected to arrive non-negative; a negative value is logged
/// and treated as zero rather than rejected.
pub fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, value = %value, "negative input clamped to zero");
        return Decimal::ZERO;
    }
    value
}

/// Clamps a caller-supplied amount or rate into `[0, upper]`.
///
/// Negative values go to zero through [`non_negative`]; values above `upper`
/// are logged and capped so the downstream arithmetic stays representable.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use clt_pj_core::calculations::common::bounded;
///
/// assert_eq!(bounded("costs_rate", dec!(0.05), dec!(10)), dec!(0.05));
/// assert_eq!(bounded("costs_rate", dec!(50), dec!(10)), dec!(10));
/// ```
pub fn bounded(
    field: &'static str,
    value: Decimal,
    upper: Decimal,
) -> Decimal {
    let value = non_negative(field, value);
    if value > upper {
        warn!(field, value = %value, upper = %upper, "input above upper bound clamped");
        return upper;
    }
    value
}
