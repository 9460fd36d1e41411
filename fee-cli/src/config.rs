//! TOML configuration for the command-line front end.
//!
//! Every key is optional; anything left out keeps its default.
//!
//! ```toml
//! [rates]
//! increase_rate = "0.3074"
//! cash_rate = "0.08"
//! cc_single_rate = "0.06"
//! cc8_rate = "0.03"
//!
//! [display]
//! currency = "TRY"
//! ```
//!
//! Rates may be written as strings or as plain TOML numbers.

use std::path::{Path, PathBuf};

use fee_core::{DiscountConfig, DiscountConfigError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rate schedule: {0}")]
    Rates(#[from] DiscountConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Currency code appended to every rendered amount.
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "TRY".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rates: DiscountConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Parses and validates configuration text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.rates.validate()?;
        Ok(config)
    }

    /// Loads the configuration from `path`, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("no config file given; using default rate schedule");
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;

        info!(
            path = %path.display(),
            increase_rate = %config.rates.increase_rate,
            "loaded rate schedule"
        );
        Ok(config)
    }
}
