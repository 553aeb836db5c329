//! # Catalog Errors
//!
//! Integrity failures found while building the catalog. Every variant except
//! the pattern variants is fatal for [`Catalog::build`](crate::Catalog::build);
//! pattern variants are logged and the offending pattern is excluded.

use esgd_core::{Framework, MetricCategory};
use thiserror::Error;

/// Error raised while validating or compiling the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two requirements share an id within the same framework.
    #[error("duplicate requirement id {requirement_id:?} in {framework}")]
    DuplicateRequirement {
        /// Framework holding both entries.
        framework: Framework,
        /// The colliding id.
        requirement_id: String,
    },

    /// A requirement has no keywords and could never be matched.
    #[error("requirement {requirement_id:?} in {framework} has no keywords")]
    EmptyKeywords {
        /// Framework of the requirement.
        framework: Framework,
        /// Offending requirement.
        requirement_id: String,
    },

    /// A category mapping names a requirement absent from the catalog.
    #[error("{category} maps to unknown requirement {requirement_id:?} in {framework}")]
    UnknownMappedRequirement {
        /// Category whose mapping is broken.
        category: MetricCategory,
        /// Framework the mapping targets.
        framework: Framework,
        /// The id that does not exist.
        requirement_id: String,
    },

    /// A pattern's regex source failed to compile.
    #[error("pattern {pattern_id} failed to compile: {source}")]
    PatternCompile {
        /// Identifier of the pattern.
        pattern_id: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A pattern references a capture group its regex does not define.
    #[error("pattern {pattern_id} references capture group {group} but only {available} exist")]
    PatternGroup {
        /// Identifier of the pattern.
        pattern_id: String,
        /// The referenced group index.
        group: usize,
        /// Number of capture groups in the regex, excluding group 0.
        available: usize,
    },
}

impl CatalogError {
    /// Whether this error excludes a single pattern rather than failing the
    /// whole catalog.
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, Self::PatternCompile { .. } | Self::PatternGroup { .. })
    }
}

/// Result alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;
