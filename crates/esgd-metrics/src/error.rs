//! # Metric Errors
//!
//! [`MetricsError`] is a construction failure. [`MetricRejection`] is the
//! per-metric outcome of standardization; rejected metrics are dropped and
//! never reach the caller.

use esgd_core::MetricCategory;
use thiserror::Error;

/// Failure building a metrics component.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// A built-in regex failed to compile.
    #[error("built-in pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result alias for metrics component construction.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Why a candidate metric was dropped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricRejection {
    /// The matched literal contains no extractable number.
    #[error("no number in {raw:?}")]
    Unparseable {
        /// Matched literal.
        raw: String,
    },

    /// The converted value is NaN or infinite.
    #[error("converted value is not finite")]
    NonFinite,

    /// The converted value is below zero.
    #[error("negative value {value}")]
    Negative {
        /// Converted value.
        value: f64,
    },

    /// A percentage above 100.
    #[error("percentage {value} exceeds 100")]
    PercentageOverflow {
        /// Converted value.
        value: f64,
    },

    /// Outside the plausible range for its category.
    #[error("{category} value {value} exceeds plausible maximum {limit}")]
    Implausible {
        /// Metric category.
        category: MetricCategory,
        /// Converted value.
        value: f64,
        /// Upper bound.
        limit: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_display() {
        assert_eq!(
            MetricRejection::Unparseable { raw: "n/a".into() }.to_string(),
            "no number in \"n/a\""
        );
        assert_eq!(MetricRejection::NonFinite.to_string(), "converted value is not finite");
        assert_eq!(
            MetricRejection::Negative { value: -2.0 }.to_string(),
            "negative value -2"
        );
        assert_eq!(
            MetricRejection::PercentageOverflow { value: 120.0 }.to_string(),
            "percentage 120 exceeds 100"
        );
        let implausible = MetricRejection::Implausible {
            category: MetricCategory::Emissions,
            value: 2e9,
            limit: 1e9,
        };
        assert!(implausible.to_string().starts_with("emissions value"));
    }

    #[test]
    fn pattern_error_from_regex() {
        let err: MetricsError = regex::Regex::new("(").unwrap_err().into();
        assert!(err.to_string().contains("failed to compile"));
    }
}
