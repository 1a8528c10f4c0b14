use clt_pj_core::calculations::common::non_negative;
use clt_pj_core::calculations::tables::{MAX_AMOUNT, MAX_RATE};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a command-line amount or rate is rejected.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("'{input}' exceeds the maximum of {max}")]
    TooLarge { input: String, max: Decimal },
}

/// Parses a monthly amount (salary or billing), at most [`MAX_AMOUNT`].
///
/// The decimal separator is `.`; commas are treated as thousands separators
/// (`"12,500.00"`). Empty input is zero. Negative values are clamped to zero
/// with a warning.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    parse_bounded(s, MAX_AMOUNT)
}

/// Parses a rate given as a fraction (`"0.28"`), at most [`MAX_RATE`].
pub fn parse_rate(s: &str) -> Result<Decimal, ParseAmountError> {
    parse_bounded(s, MAX_RATE)
}

fn parse_bounded(
    s: &str,
    max: Decimal,
) -> Result<Decimal, ParseAmountError> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value: Decimal = normalized.parse().map_err(|source| {
        tracing::error!(input = %s, "invalid amount: {}", source);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source,
        }
    })?;

    if value > max {
        return Err(ParseAmountError::TooLarge {
            input: s.to_string(),
            max,
        });
    }
    Ok(non_negative("command-line amount", value))
}
