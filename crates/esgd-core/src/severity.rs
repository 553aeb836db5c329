//! # Gap Severity
//!
//! Ordered from most to least urgent. The derived `Ord` follows declaration
//! order, so sorting gaps ascending puts critical gaps first.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EsgdError;

/// How urgently a missing disclosure requirement must be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Regulatory exposure; must be disclosed.
    Critical,
    /// Mandatory or sector-material requirement.
    High,
    /// Optional requirement with no sector-specific weight.
    Medium,
    /// Informational.
    Low,
}

impl Severity {
    /// Returns all severities, most urgent first.
    pub fn all() -> &'static [Severity] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = EsgdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(EsgdError::UnknownSeverity(other.to_string())),
        }
    }
}
