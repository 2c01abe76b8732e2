//! Site configuration.
//!
//! Loaded from an optional TOML file. Every key has a default equal to the
//! built-in behaviour of the site, so an empty file is a valid config.
//!
//! ```toml
//! log_level = "debug"
//! log_file = "travel-buddy.log"
//!
//! [pricing]
//! fallback_rate = "1000"
//! group_size_threshold = 2
//! group_surcharge = "0.20"
//!
//! [[pricing.promo_codes]]
//! code = "EARLYBIRD"
//! discount = "0.10"
//!
//! [[packages]]
//! id = 1
//! destination = "Bali, Indonesia"
//! duration_days = 7
//! base_price = "1200"
//! season = "peak"
//! ```
//!
//! Lists replace the built-in list entirely when present. Rates and package
//! prices must lie in `0..=1000000000`; anything else is a parse error.

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use travel_core::{PricingConfig, TourPackage};

/// Errors that can occur while loading the site configuration.
#[derive(Debug, Error)]
pub enum SiteConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Log filter directive. `RUST_LOG` takes precedence when set.
    pub log_level: String,

    /// Append log output to this file in addition to stdout.
    pub log_file: Option<PathBuf>,

    pub pricing: PricingConfig,

    /// Rows of the package pricing table.
    pub packages: Vec<TourPackage>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            pricing: PricingConfig::default(),
            packages: TourPackage::default_catalog(),
        }
    }
}

impl SiteConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self, SiteConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SiteConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents).map_err(|source| SiteConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SiteConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
