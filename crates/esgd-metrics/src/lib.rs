//! # esgd-metrics: Metric Extraction and Standardization
//!
//! Turns free text into quantitative ESG metrics in four stages:
//!
//! 1. [`MetricExtractor`] runs the catalog's category patterns and parses
//!    each match into an [`ExtractedMetric`].
//! 2. [`Standardizer`] converts values into canonical units, rejects
//!    implausible ones, and attaches framework mappings.
//! 3. [`ConfidenceRefiner`] removes duplicates and scores each metric
//!    against its context.
//! 4. [`MetricsReport`] and [`aggregate`] summarize the result.
//!
//! Every stage is deterministic: the same text and catalog always produce
//! the same metrics in the same order.

#![deny(missing_docs)]

pub mod error;
pub mod extract;
pub mod number;
pub mod refine;
pub mod report;
pub mod standardize;
pub mod year;

pub use error::{MetricRejection, MetricsError, MetricsResult};
pub use extract::{metric_name, ExtractedMetric, MetricExtractor, CONTEXT_CHARS};
pub use number::{parse_number, NumberKind, ParsedNumber};
pub use refine::ConfidenceRefiner;
pub use report::{
    aggregate, AggregatedMetric, AggregationMode, MetricSummary, MetricsReport, HIGH_CONFIDENCE,
};
pub use standardize::{StandardizedMetric, Standardizer, UnitResolution, MAX_EMISSIONS};
pub use year::{YearExtractor, MIN_YEAR};
