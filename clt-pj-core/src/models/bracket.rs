use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A slice of a contribution table applied cumulatively across brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveBracket {
    pub limit: Decimal,
    pub rate: Decimal,
}

/// A bracket whose published formula is `base × rate − deduction`.
///
/// A `None` limit marks the unbounded top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBracket {
    pub limit: Option<Decimal>,
    pub rate: Decimal,
    pub deduction: Decimal,
}

impl DeductionBracket {
    /// Whether `amount` falls at or below this bracket's limit.
    pub fn covers(
        &self,
        amount: Decimal,
    ) -> bool {
        self.limit.is_none_or(|limit| amount <= limit)
    }
}
