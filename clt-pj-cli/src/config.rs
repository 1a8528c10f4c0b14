//! TOML configuration for the command-line front end.
//!
//! ```toml
//! log_level = "clt_pj_core=debug"
//!
//! [rates]
//! patronal_rate = "0.00"
//! inss_ceiling = "908.85"
//! ```
//!
//! Every key is optional. Missing rates keep their [`ComparisonConfig`]
//! defaults.

use std::path::{Path, PathBuf};

use clt_pj_core::{ComparisonConfig, ComparisonConfigError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Filter directive used when `--log-level` is not given.
    pub log_level: Option<String>,
    pub rates: ComparisonConfig,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rates: {0}")]
    InvalidRates(#[from] ComparisonConfigError),
}

/// Parses a TOML document and validates the rate overrides.
pub fn load_from_str(input: &str) -> Result<CliConfig, ConfigLoadError> {
    let config: CliConfig = toml::from_str(input)?;
    config.rates.validate()?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

pub fn load_from_file(path: &Path) -> Result<CliConfig, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}
