//! IRRF monthly income tax withholding.
//!
//! Unlike INSS, the published IRRF table already folds the lower brackets into
//! a per-bracket deduction, so the tax is a single lookup followed by
//! `base × rate − deduction`.
//!
//! | Taxable base | Rate | Deduction |
//! |--------------|------|-----------|
//! | up to R$ 2.259,20 | exempt | — |
//! | up to R$ 2.826,65 | 7.5% | R$ 169,44 |
//! | up to R$ 3.751,05 | 15% | R$ 381,44 |
//! | up to R$ 4.664,68 | 22.5% | R$ 662,77 |
//! | above | 27.5% | R$ 896,00 |

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::tables::IRRF_BRACKETS;
use crate::models::DeductionBracket;

/// IRRF on a monthly taxable base using the 2024 table.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use clt_pj_core::calculations::irrf::irrf_tax;
///
/// // 3000.00 × 15% − 381.44
/// assert_eq!(irrf_tax(dec!(3000.00)), dec!(-68.56));
/// ```
pub fn irrf_tax(taxable_base: Decimal) -> Decimal {
    deduction_formula_tax(taxable_base, &IRRF_BRACKETS)
}

/// Applies the formula of the first bracket covering `taxable_base`.
///
/// The result is clamped at zero before being negated. If no bracket covers
/// the base (a table without an unbounded top bracket) the tax is zero.
pub fn deduction_formula_tax(
    taxable_base: Decimal,
    brackets: &[DeductionBracket],
) -> Decimal {
    let Some(bracket) = brackets.iter().find(|b| b.covers(taxable_base)) else {
        debug!(taxable_base = %taxable_base, "no bracket covers taxable base");
        return Decimal::ZERO;
    };

    let tax = taxable_base * bracket.rate - bracket.deduction;

    -max(tax, Decimal::ZERO)
}
