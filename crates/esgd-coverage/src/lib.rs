//! # esgd-coverage: Coverage and Gap Analysis
//!
//! Combines keyword findings and standardized metrics into per-framework
//! coverage, a severity-ranked list of missing requirements, and
//! recommendations.
//!
//! The analysis is pure: no I/O, no shared mutable state. Empty input
//! yields zero coverage and a gap for every requirement of every requested
//! framework.

#![deny(missing_docs)]

pub mod analysis;
pub mod recommend;
pub mod sector;
pub mod summary;

pub use analysis::{gaps_by_framework, severity, AnalysisResult, CoverageAnalyzer, CoverageResult, GapItem};
pub use recommend::{recommendations, LOW_COVERAGE, STRONG_COVERAGE};
pub use sector::IndustrySector;
pub use summary::GapSummary;
