//! Engine configuration.
//!
//! Defaults pin nothing: the reference year is the current UTC year. Set
//! `reference_year` explicitly when results must be reproducible across
//! calendar years. Load from environment variables, a YAML file, or build
//! directly.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use esgd_metrics::MIN_YEAR;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`EngineConfig::reference_year`].
pub const ENV_REFERENCE_YEAR: &str = "ESGD_REFERENCE_YEAR";
/// Environment variable overriding [`EngineConfig::max_recommendations`].
pub const ENV_MAX_RECOMMENDATIONS: &str = "ESGD_MAX_RECOMMENDATIONS";

/// Tunable engine settings. The catalog itself is compiled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Year detection accepts years up to `reference_year + 1`.
    pub reference_year: i32,
    /// Cap on generated recommendations.
    pub max_recommendations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_year: chrono::Utc::now().year(),
            max_recommendations: 10,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by environment variables.
    ///
    /// Variables:
    /// - `ESGD_REFERENCE_YEAR` (default: current UTC year)
    /// - `ESGD_MAX_RECOMMENDATIONS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|var| std::env::var(var).ok())
    }

    /// Parse a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(year) = parse_var(&lookup, ENV_REFERENCE_YEAR)? {
            self.reference_year = year;
        }
        if let Some(max) = parse_var(&lookup, ENV_MAX_RECOMMENDATIONS)? {
            self.max_recommendations = max;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_year < MIN_YEAR {
            return Err(ConfigError::ReferenceYear(self.reference_year));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                var: var.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`EngineConfig`].
    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An environment variable holds an unparseable value.
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        /// Variable name.
        var: String,
        /// Raw value.
        value: String,
        /// Parse error.
        reason: String,
    },

    /// The reference year precedes the earliest accepted reporting year.
    #[error("reference year {0} is before {min}", min = MIN_YEAR)]
    ReferenceYear(i32),
}
