//! # Error Hierarchy
//!
//! Errors raised when parsing the workspace's closed vocabularies from
//! external strings (CLI arguments, configuration files, JSON payloads).

use thiserror::Error;

/// Error produced when a string does not name a known vocabulary member.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EsgdError {
    /// The string is not one of CSRD, GRI, SASB, TCFD.
    #[error("unknown disclosure framework: {0:?}")]
    UnknownFramework(String),

    /// The string is not a snake_case metric category.
    #[error("unknown metric category: {0:?}")]
    UnknownCategory(String),

    /// The string is not a gap severity.
    #[error("unknown gap severity: {0:?}")]
    UnknownSeverity(String),

    /// The string is not an emissions scope ("1", "2" or "3").
    #[error("unknown emissions scope: {0:?}")]
    UnknownScope(String),
}
