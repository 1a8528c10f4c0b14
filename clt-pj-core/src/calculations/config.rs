//! Scalar parameters of the comparison.
//!
//! The bracket tables are fixed for the fiscal year and live in
//! [`tables`](crate::calculations::tables). The handful of scalars below are
//! configurable because some of them are assumptions rather than settled
//! rules (notably the employer-side INSS rate on the pró-labore).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::tables::{
    INSS_CEILING, INSS_PATRONAL_CEILING, INSS_PATRONAL_RATE, IRRF_DEPENDENT_DEDUCTION,
    MIN_PRO_LABORE, SIMPLES_FALLBACK_RATE,
};

/// Errors raised when validating a [`ComparisonConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComparisonConfigError {
    /// The INSS ceiling must be positive.
    #[error("INSS ceiling must be positive, got {0}")]
    InvalidInssCeiling(Decimal),

    /// The per-dependent deduction must be non-negative.
    #[error("dependent deduction must be non-negative, got {0}")]
    InvalidDependentDeduction(Decimal),

    /// The employer-side INSS rate must be between 0 and 1.
    #[error("patronal INSS rate must be between 0 and 1, got {0}")]
    InvalidPatronalRate(Decimal),

    /// The employer-side INSS ceiling must be positive.
    #[error("patronal INSS ceiling must be positive, got {0}")]
    InvalidPatronalCeiling(Decimal),

    /// The pró-labore floor must be strictly positive.
    #[error("minimum pro-labore must be positive, got {0}")]
    InvalidMinProLabore(Decimal),

    /// The Simples Nacional fallback rate must be between 0 and 1.
    #[error("Simples Nacional fallback rate must be between 0 and 1, got {0}")]
    InvalidSimplesFallbackRate(Decimal),
}

/// Configuration parameters for the CLT and PJ calculation chains.
///
/// [`Default`] gives the 2024 values. Deserialization fills any missing field
/// from the defaults, so a config file only needs the values it overrides.
/// Unknown keys are rejected.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use clt_pj_core::ComparisonConfig;
///
/// let config = ComparisonConfig {
///     patronal_rate: dec!(0.00),
///     ..ComparisonConfig::default()
/// };
///
/// assert_eq!(config.validate(), Ok(()));
/// assert_eq!(config.inss_ceiling, dec!(908.85));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Maximum monthly employee INSS (teto).
    pub inss_ceiling: Decimal,

    /// IRRF base deduction per dependent.
    pub dependent_deduction: Decimal,

    /// Employer-side INSS rate on the pró-labore.
    ///
    /// 20% is an assumption: under Anexo III this is normally included in
    /// the DAS. Set to zero to model that case.
    pub patronal_rate: Decimal,

    /// Cap on the employer-side INSS.
    pub patronal_ceiling: Decimal,

    /// Smallest pró-labore used, whatever the billing and rate.
    pub min_pro_labore: Decimal,

    /// Rate applied to monthly billing above the Simples Nacional table.
    pub simples_fallback_rate: Decimal,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            inss_ceiling: INSS_CEILING,
            dependent_deduction: IRRF_DEPENDENT_DEDUCTION,
            patronal_rate: INSS_PATRONAL_RATE,
            patronal_ceiling: INSS_PATRONAL_CEILING,
            min_pro_labore: MIN_PRO_LABORE,
            simples_fallback_rate: SIMPLES_FALLBACK_RATE,
        }
    }
}

impl ComparisonConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonConfigError`] if:
    /// - `inss_ceiling` or `patronal_ceiling` is not positive
    /// - `dependent_deduction` is negative
    /// - `patronal_rate` or `simples_fallback_rate` is not in [0, 1]
    /// - `min_pro_labore` is not positive
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use clt_pj_core::{ComparisonConfig, ComparisonConfigError};
    ///
    /// let config = ComparisonConfig {
    ///     min_pro_labore: dec!(0),
    ///     ..ComparisonConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(ComparisonConfigError::InvalidMinProLabore(dec!(0)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ComparisonConfigError> {
        if self.inss_ceiling <= Decimal::ZERO {
            return Err(ComparisonConfigError::InvalidInssCeiling(
                self.inss_ceiling,
            ));
        }
        if self.dependent_deduction < Decimal::ZERO {
            return Err(ComparisonConfigError::InvalidDependentDeduction(
                self.dependent_deduction,
            ));
        }
        if self.patronal_rate < Decimal::ZERO || self.patronal_rate > Decimal::ONE {
            return Err(ComparisonConfigError::InvalidPatronalRate(
                self.patronal_rate,
            ));
        }
        if self.patronal_ceiling <= Decimal::ZERO {
            return Err(ComparisonConfigError::InvalidPatronalCeiling(
                self.patronal_ceiling,
            ));
        }
        if self.min_pro_labore <= Decimal::ZERO {
            return Err(ComparisonConfigError::InvalidMinProLabore(
                self.min_pro_labore,
            ));
        }
        if self.simples_fallback_rate < Decimal::ZERO || self.simples_fallback_rate > Decimal::ONE
        {
            return Err(ComparisonConfigError::InvalidSimplesFallbackRate(
                self.simples_fallback_rate,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ComparisonConfig::default();

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn default_config_carries_2024_values() {
        let config = ComparisonConfig::default();

        assert_eq!(config.inss_ceiling, dec!(908.85));
        assert_eq!(config.dependent_deduction, dec!(189.59));
        assert_eq!(config.patronal_rate, dec!(0.20));
        assert_eq!(config.patronal_ceiling, dec!(1557.20));
        assert_eq!(config.min_pro_labore, dec!(0.01));
        assert_eq!(config.simples_fallback_rate, dec!(0.33));
    }

    #[test]
    fn validate_rejects_zero_inss_ceiling() {
        let config = ComparisonConfig {
            inss_ceiling: dec!(0),
            ..ComparisonConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ComparisonConfigError::InvalidInssCeiling(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_negative_dependent_deduction() {
        let config = ComparisonConfig {
            dependent_deduction: dec!(-189.59),
            ..ComparisonConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ComparisonConfigError::InvalidDependentDeduction(dec!(
                -189.59
            )))
        );
    }

    #[test]
    fn validate_accepts_zero_patronal_rate() {
        let config = ComparisonConfig {
            patronal_rate: dec!(0),
            ..ComparisonConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_patronal_rate_above_one() {
        let config = ComparisonConfig {
            patronal_rate: dec!(20),
            ..ComparisonConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ComparisonConfigError::InvalidPatronalRate(dec!(20)))
        );
    }

    #[test]
    fn validate_rejects_negative_patronal_ceiling() {
        let config = ComparisonConfig {
            patronal_ceiling: dec!(-1),
            ..ComparisonConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ComparisonConfigError::InvalidPatronalCeiling(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_zero_min_pro_labore() {
        let config = ComparisonConfig {
            min_pro_labore: dec!(0.00),
            ..ComparisonConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ComparisonConfigError::InvalidMinProLabore(dec!(0.00)))
        );
    }

    #[test]
    fn validate_rejects_negative_fallback_rate() {
        let config = ComparisonConfig {
            simples_fallback_rate: dec!(-0.33),
            ..ComparisonConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ComparisonConfigError::InvalidSimplesFallbackRate(dec!(
                -0.33
            )))
        );
    }
}
