//! Fiscal calculations for the CLT vs PJ comparison.
//!
//! The leaf functions ([`inss`], [`irrf`], [`simples`]) each implement one
//! published formula over a constant 2024 table from [`tables`]. The
//! [`comparison`] module composes them into a [`ComparisonResult`].
//!
//! [`ComparisonResult`]: crate::ComparisonResult

pub mod common;
pub mod comparison;
pub mod config;
pub mod inss;
pub mod irrf;
pub mod simples;
pub mod tables;

pub use comparison::{RegimeComparison, calculate_full_comparison};
pub use config::{ComparisonConfig, ComparisonConfigError};
