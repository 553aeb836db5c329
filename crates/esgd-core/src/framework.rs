//! # Disclosure Frameworks
//!
//! Defines the [`Framework`] enum: the four ESG disclosure standards the
//! engine evaluates documents against. Each framework owns an independent
//! requirement catalog; requirement identifiers are only unique within a
//! framework.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EsgdError;

/// An ESG disclosure standard.
///
/// Variant order is the canonical reporting order used by every
/// per-framework output in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Framework {
    /// EU Corporate Sustainability Reporting Directive (ESRS topics).
    Csrd,
    /// Global Reporting Initiative standards.
    Gri,
    /// Sustainability Accounting Standards Board industry standards.
    Sasb,
    /// Task Force on Climate-related Financial Disclosures.
    Tcfd,
}

/// Total number of frameworks.
pub const FRAMEWORK_COUNT: usize = 4;

impl Framework {
    /// Returns all frameworks in canonical order.
    pub fn all() -> &'static [Framework] {
        &[Self::Csrd, Self::Gri, Self::Sasb, Self::Tcfd]
    }

    /// Returns the identifier used in serialized output and requirement ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csrd => "CSRD",
            Self::Gri => "GRI",
            Self::Sasb => "SASB",
            Self::Tcfd => "TCFD",
        }
    }

    /// Returns the full name of the standard.
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Csrd => "Corporate Sustainability Reporting Directive",
            Self::Gri => "Global Reporting Initiative",
            Self::Sasb => "Sustainability Accounting Standards Board",
            Self::Tcfd => "Task Force on Climate-related Financial Disclosures",
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = EsgdError;

    /// Parse a framework identifier, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|fw| fw.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EsgdError::UnknownFramework(s.to_string()))
    }
}
