pub mod calculations;
pub mod models;

pub use calculations::{
    ComparisonConfig, ComparisonConfigError, RegimeComparison, calculate_full_comparison,
};
pub use models::*;
