//! CLT vs PJ comparison.
//!
//! # CLT chain
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | INSS on the gross salary (accumulated brackets, capped) |
//! | 2 | IRRF base: gross + INSS − dependents × per-dependent deduction, floored at 0 |
//! | 3 | IRRF on step 2 |
//! | 4 | Total taxes: INSS + IRRF |
//! | 5 | Net: gross + total taxes |
//! | 6 | Employer cost: gross × (1 + employer charges rate) |
//!
//! # PJ chain
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | Pró-labore: billing × pró-labore rate, floored at a small positive amount |
//! | 2 | Employer-side INSS: pró-labore × patronal rate, capped |
//! | 3 | Owner-side INSS on the pró-labore |
//! | 4 | IRRF on pró-labore + owner-side INSS, floored at 0 |
//! | 5 | Simples Nacional with RBT12 = billing × 12 |
//! | 6 | Fixed costs: billing × costs rate |
//! | 7 | Net: billing minus steps 2 through 6 |
//!
//! Every tax and cost is carried as a negative amount, so nets are plain sums.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use clt_pj_core::{CltInputs, PjInputs, Regime, calculate_full_comparison};
//!
//! let clt = CltInputs {
//!     gross_salary: dec!(8500),
//!     dependents: 0,
//!     employer_charges_rate: dec!(0.338),
//! };
//! let pj = PjInputs {
//!     billing_monthly: dec!(12500),
//!     pro_labore_rate: dec!(0.28),
//!     costs_rate: dec!(0.05),
//! };
//!
//! let result = calculate_full_comparison(&clt, &pj);
//!
//! assert_eq!(result.clt.employer_cost, dec!(11373.00));
//! assert_eq!(result.pj.pro_labore, dec!(3500.00));
//! assert_eq!(result.difference.advantage(), Regime::Pj);
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{bounded, max};
use crate::calculations::config::{ComparisonConfig, ComparisonConfigError};
use crate::calculations::inss::accumulated_contribution;
use crate::calculations::irrf::irrf_tax;
use crate::calculations::simples::effective_rate_tax;
use crate::calculations::tables::{
    INSS_BRACKETS, MAX_AMOUNT, MAX_RATE, MONTHS_PER_YEAR, SIMPLES_ANEXO_III_BRACKETS,
};
use crate::models::{CltBreakdown, CltInputs, ComparisonResult, Difference, PjBreakdown, PjInputs};

/// Compares CLT and PJ using the 2024 defaults.
///
/// Shorthand for `RegimeComparison::default().compare(clt, pj)`.
pub fn calculate_full_comparison(
    clt: &CltInputs,
    pj: &PjInputs,
) -> ComparisonResult {
    RegimeComparison::default().compare(clt, pj)
}

/// Calculator for the CLT vs PJ comparison.
///
/// Holds a validated [`ComparisonConfig`]; every calculation afterwards is
/// infallible and keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct RegimeComparison {
    config: ComparisonConfig,
}

impl RegimeComparison {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonConfigError`] if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use clt_pj_core::{ComparisonConfig, RegimeComparison};
    ///
    /// let config = ComparisonConfig {
    ///     patronal_rate: dec!(0),
    ///     ..ComparisonConfig::default()
    /// };
    ///
    /// assert!(RegimeComparison::new(config).is_ok());
    /// ```
    pub fn new(config: ComparisonConfig) -> Result<Self, ComparisonConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Computes both regimes and the difference between them.
    pub fn compare(
        &self,
        clt: &CltInputs,
        pj: &PjInputs,
    ) -> ComparisonResult {
        let clt = self.clt_breakdown(clt);
        let pj = self.pj_breakdown(pj);
        let difference = self.difference(&clt, &pj);

        debug!(
            clt_net = %clt.net_monthly,
            pj_net = %pj.net_monthly,
            monthly_difference = %difference.monthly,
            "comparison calculated"
        );

        ComparisonResult {
            clt,
            pj,
            difference,
        }
    }

    /// Computes the monthly CLT breakdown.
    pub fn clt_breakdown(
        &self,
        inputs: &CltInputs,
    ) -> CltBreakdown {
        let gross = bounded("gross_salary", inputs.gross_salary, MAX_AMOUNT);
        let charges_rate = bounded("employer_charges_rate", inputs.employer_charges_rate, MAX_RATE);

        // INSS on the gross salary
        let inss = self.inss(gross);

        // IRRF base: INSS is negative, so adding it subtracts the contribution
        let ir_base = self.clt_ir_base(gross, inss, inputs.dependents);
        let irrf = irrf_tax(ir_base);

        let total_taxes = inss + irrf;
        let net_monthly = gross + total_taxes;

        CltBreakdown {
            gross_monthly: gross,
            inss,
            irrf,
            total_taxes,
            net_monthly,
            employer_cost: gross * (Decimal::ONE + charges_rate),
            annual_net: net_monthly * MONTHS_PER_YEAR,
        }
    }

    /// Computes the monthly PJ breakdown.
    pub fn pj_breakdown(
        &self,
        inputs: &PjInputs,
    ) -> PjBreakdown {
        let billing = bounded("billing_monthly", inputs.billing_monthly, MAX_AMOUNT);
        let pro_labore_rate = bounded("pro_labore_rate", inputs.pro_labore_rate, MAX_RATE);
        let costs_rate = bounded("costs_rate", inputs.costs_rate, MAX_RATE);

        let pro_labore = self.pro_labore(billing, pro_labore_rate);
        let inss_patronal = self.inss_patronal(pro_labore);
        let inss_socio = self.inss(pro_labore);

        let ir_base = max(pro_labore + inss_socio, Decimal::ZERO);
        let irrf = irrf_tax(ir_base);

        let simples_nacional = effective_rate_tax(
            billing * MONTHS_PER_YEAR,
            billing,
            &SIMPLES_ANEXO_III_BRACKETS,
            self.config.simples_fallback_rate,
        );

        let costs = -(billing * costs_rate);

        let total_taxes_and_costs = inss_patronal + inss_socio + irrf + simples_nacional + costs;
        let net_monthly = billing + total_taxes_and_costs;

        PjBreakdown {
            billing_monthly: billing,
            pro_labore,
            inss_patronal,
            inss_socio,
            irrf,
            simples_nacional,
            costs,
            total_taxes_and_costs,
            net_monthly,
            annual_net: net_monthly * MONTHS_PER_YEAR,
        }
    }

    /// Employee INSS with the configured ceiling.
    fn inss(
        &self,
        base: Decimal,
    ) -> Decimal {
        accumulated_contribution(base, &INSS_BRACKETS, self.config.inss_ceiling)
    }

    /// IRRF base for a salaried employee, floored at zero.
    fn clt_ir_base(
        &self,
        gross: Decimal,
        inss: Decimal,
        dependents: u32,
    ) -> Decimal {
        let dependent_deduction = Decimal::from(dependents) * self.config.dependent_deduction;
        max(gross + inss - dependent_deduction, Decimal::ZERO)
    }

    /// Share of billing paid to the owner, never below the configured floor.
    fn pro_labore(
        &self,
        billing: Decimal,
        rate: Decimal,
    ) -> Decimal {
        let pro_labore = billing * rate;
        if pro_labore < self.config.min_pro_labore {
            debug!(
                pro_labore = %pro_labore,
                floor = %self.config.min_pro_labore,
                "pro-labore raised to floor"
            );
            return self.config.min_pro_labore;
        }
        pro_labore
    }

    /// Employer-side INSS on the pró-labore, capped.
    fn inss_patronal(
        &self,
        pro_labore: Decimal,
    ) -> Decimal {
        -(pro_labore * self.config.patronal_rate).min(self.config.patronal_ceiling)
    }

    fn difference(
        &self,
        clt: &CltBreakdown,
        pj: &PjBreakdown,
    ) -> Difference {
        let monthly = pj.net_monthly - clt.net_monthly;

        let percent = pj
            .net_monthly
            .checked_div(clt.net_monthly)
            .and_then(|ratio| (ratio - Decimal::ONE).checked_mul(Decimal::ONE_HUNDRED));

        if percent.is_none() {
            warn!(
                clt_net = %clt.net_monthly,
                pj_net = %pj.net_monthly,
                "CLT net too small; percentage difference is undefined"
            );
        }

        Difference {
            monthly,
            annual: monthly * MONTHS_PER_YEAR,
            percent,
        }
    }
}
