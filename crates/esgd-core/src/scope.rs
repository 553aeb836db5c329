//! # GHG Protocol Emission Scopes

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EsgdError;

/// GHG Protocol emission scope, serialized as `"1"`, `"2"` or `"3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmissionsScope {
    /// Direct emissions from owned or controlled sources.
    #[serde(rename = "1")]
    One,
    /// Indirect emissions from purchased energy.
    #[serde(rename = "2")]
    Two,
    /// All other value-chain emissions.
    #[serde(rename = "3")]
    Three,
}

impl EmissionsScope {
    /// Returns the scope digit as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }

    /// Maps a scope digit character to its scope.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::One),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            _ => None,
        }
    }
}

impl std::fmt::Display for EmissionsScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmissionsScope {
    type Err = EsgdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_digit(c).ok_or_else(|| EsgdError::UnknownScope(s.to_string()))
            }
            _ => Err(EsgdError::UnknownScope(s.to_string())),
        }
    }
}
