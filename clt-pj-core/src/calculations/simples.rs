//! Simples Nacional (Anexo III) monthly DAS.
//!
//! The bracket is chosen by trailing twelve-month revenue (RBT12). The
//! nominal rate and deduction of that bracket give an effective rate:
//!
//! ```text
//! effective = (RBT12 × nominal − deduction) / RBT12
//! ```
//!
//! which is then applied to the month's billing. Revenue above the last
//! bracket (R$ 4.8 million) leaves the regime; the maximum rate is applied
//! directly instead of failing.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use clt_pj_core::calculations::simples::simples_nacional_tax;
//!
//! // RBT12 of 150 000 sits in the 6% bracket with no deduction.
//! assert_eq!(simples_nacional_tax(dec!(150000), dec!(12500)), dec!(-750.00));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::tables::{SIMPLES_ANEXO_III_BRACKETS, SIMPLES_FALLBACK_RATE};
use crate::models::DeductionBracket;

/// Monthly Simples Nacional tax using the 2024 Anexo III table.
pub fn simples_nacional_tax(
    annual_revenue: Decimal,
    monthly_billing: Decimal,
) -> Decimal {
    effective_rate_tax(
        annual_revenue,
        monthly_billing,
        &SIMPLES_ANEXO_III_BRACKETS,
        SIMPLES_FALLBACK_RATE,
    )
}

/// Applies the effective rate derived from `annual_revenue` to
/// `monthly_billing` and returns the tax negated.
///
/// Zero annual revenue has no effective rate and yields zero tax. Revenue no
/// bracket covers is charged `fallback_rate` on the monthly amount.
pub fn effective_rate_tax(
    annual_revenue: Decimal,
    monthly_billing: Decimal,
    brackets: &[DeductionBracket],
    fallback_rate: Decimal,
) -> Decimal {
    if annual_revenue <= Decimal::ZERO {
        debug!(annual_revenue = %annual_revenue, "no revenue; Simples Nacional is zero");
        return Decimal::ZERO;
    }

    let Some(bracket) = brackets.iter().find(|b| b.covers(annual_revenue)) else {
        debug!(
            annual_revenue = %annual_revenue,
            fallback_rate = %fallback_rate,
            "revenue above Simples Nacional table; applying fallback rate"
        );
        return -(monthly_billing * fallback_rate);
    };

    let effective_rate = max(
        (annual_revenue * bracket.rate - bracket.deduction) / annual_revenue,
        Decimal::ZERO,
    );

    -(monthly_billing * effective_rate)
}
