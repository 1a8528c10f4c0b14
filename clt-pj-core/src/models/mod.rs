mod bracket;
mod comparison_result;
mod regime_inputs;

pub use bracket::{DeductionBracket, ProgressiveBracket};
pub use comparison_result::{CltBreakdown, ComparisonResult, Difference, PjBreakdown, Regime};
pub use regime_inputs::{CltInputs, PjInputs};
