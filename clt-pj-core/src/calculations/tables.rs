//! Published 2024 rate tables and constants.
//!
//! | Table | Use |
//! |-------|-----|
//! | [`INSS_BRACKETS`] | Employee INSS contribution, accumulated across brackets |
//! | [`IRRF_BRACKETS`] | Monthly income tax withholding, `base × rate − deduction` |
//! | [`SIMPLES_ANEXO_III_BRACKETS`] | Simples Nacional Anexo III, keyed on trailing 12-month revenue |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{DeductionBracket, ProgressiveBracket};

pub const INSS_BRACKETS: [ProgressiveBracket; 4] = [
    ProgressiveBracket { limit: dec!(1412.00), rate: dec!(0.075) },
    ProgressiveBracket { limit: dec!(2666.68), rate: dec!(0.09) },
    ProgressiveBracket { limit: dec!(4000.03), rate: dec!(0.12) },
    ProgressiveBracket { limit: dec!(7786.02), rate: dec!(0.14) },
];

/// Maximum monthly employee INSS contribution (teto).
pub const INSS_CEILING: Decimal = dec!(908.85);

pub const IRRF_BRACKETS: [DeductionBracket; 5] = [
    DeductionBracket { limit: Some(dec!(2259.20)), rate: dec!(0), deduction: dec!(0) },
    DeductionBracket { limit: Some(dec!(2826.65)), rate: dec!(0.075), deduction: dec!(169.44) },
    DeductionBracket { limit: Some(dec!(3751.05)), rate: dec!(0.15), deduction: dec!(381.44) },
    DeductionBracket { limit: Some(dec!(4664.68)), rate: dec!(0.225), deduction: dec!(662.77) },
    DeductionBracket { limit: None, rate: dec!(0.275), deduction: dec!(896.00) },
];

/// Monthly IRRF base deduction per declared dependent.
pub const IRRF_DEPENDENT_DEDUCTION: Decimal = dec!(189.59);

pub const SIMPLES_ANEXO_III_BRACKETS: [DeductionBracket; 6] = [
    DeductionBracket { limit: Some(dec!(180000)), rate: dec!(0.06), deduction: dec!(0) },
    DeductionBracket { limit: Some(dec!(360000)), rate: dec!(0.112), deduction: dec!(9360) },
    DeductionBracket { limit: Some(dec!(720000)), rate: dec!(0.135), deduction: dec!(17640) },
    DeductionBracket { limit: Some(dec!(1800000)), rate: dec!(0.16), deduction: dec!(35640) },
    DeductionBracket { limit: Some(dec!(3600000)), rate: dec!(0.21), deduction: dec!(125640) },
    DeductionBracket { limit: Some(dec!(4800000)), rate: dec!(0.33), deduction: dec!(648000) },
];

/// Flat rate applied to monthly billing once annual revenue leaves the table.
pub const SIMPLES_FALLBACK_RATE: Decimal = dec!(0.33);

/// Employer-side INSS rate on the pró-labore.
///
/// Assumed, not confirmed: companies taxed under Anexo III usually have the
/// patronal contribution folded into the DAS. Needs review by an accountant.
pub const INSS_PATRONAL_RATE: Decimal = dec!(0.20);

/// Cap applied to the employer-side INSS on the pró-labore.
pub const INSS_PATRONAL_CEILING: Decimal = dec!(1557.20);

/// Floor for the pró-labore so the owner always has a taxable base.
pub const MIN_PRO_LABORE: Decimal = dec!(0.01);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Largest monthly amount (salary or billing) the comparison accepts.
///
/// Keeps every product in the chains, including the twelve-month revenue,
/// well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

/// Largest rate accepted for employer charges, pró-labore share and costs.
pub const MAX_RATE: Decimal = dec!(10);

#[cfg(test)]
mod tests {
    use super::*;

    fn strictly_increasing(limits: &[Decimal]) -> bool {
        limits.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[test]
    fn inss_limits_strictly_increase() {
        let limits: Vec<Decimal> = INSS_BRACKETS.iter().map(|b| b.limit).collect();

        assert!(strictly_increasing(&limits));
    }

    #[test]
    fn inss_rates_never_decrease() {
        assert!(INSS_BRACKETS.windows(2).all(|pair| pair[0].rate <= pair[1].rate));
    }

    #[test]
    fn inss_ceiling_sits_just_below_full_table_sum() {
        let mut previous = Decimal::ZERO;
        let mut full = Decimal::ZERO;
        for bracket in INSS_BRACKETS {
            full += (bracket.limit - previous) * bracket.rate;
            previous = bracket.limit;
        }

        assert!(INSS_CEILING <= full);
    }

    #[test]
    fn irrf_limits_strictly_increase_and_end_unbounded() {
        let (last, bounded) = IRRF_BRACKETS.split_last().expect("table is not empty");
        let limits: Vec<Decimal> = bounded.iter().filter_map(|b| b.limit).collect();

        assert_eq!(limits.len(), bounded.len());
        assert!(strictly_increasing(&limits));
        assert!(last.limit.is_none());
    }

    #[test]
    fn simples_limits_strictly_increase_and_are_all_bounded() {
        let limits: Vec<Decimal> = SIMPLES_ANEXO_III_BRACKETS
            .iter()
            .filter_map(|b| b.limit)
            .collect();

        assert_eq!(limits.len(), SIMPLES_ANEXO_III_BRACKETS.len());
        assert!(strictly_increasing(&limits));
    }
}
