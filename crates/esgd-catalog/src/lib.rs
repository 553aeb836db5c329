//! # esgd-catalog: Disclosure Requirement Catalog
//!
//! The static, read-only knowledge base of the engine:
//!
//! - **Requirements** for each [`Framework`](esgd_core::Framework), with
//!   keywords for relevance matching and requirement-level evidence patterns
//!   (`frameworks/`).
//! - **Extraction patterns** per [`MetricCategory`](esgd_core::MetricCategory),
//!   expressed as [`PatternSpec`] data rather than code (`extraction.rs`).
//! - **Unit tables** mapping raw unit aliases into one canonical unit per
//!   category (`units.rs`).
//! - **Category mappings** from metric categories to the requirements a
//!   metric of that category evidences (`mapping.rs`).
//!
//! ## Construction
//!
//! [`Catalog::load`] validates and compiles everything exactly once. A
//! duplicate requirement id within a framework, a requirement without
//! keywords, or a mapping that names a requirement absent from the catalog is
//! a [`CatalogError`] and the catalog is not built. A pattern whose regex does
//! not compile is logged and excluded; the remaining patterns stay usable.
//!
//! After construction the catalog is immutable and `Send + Sync`; share it
//! behind an `Arc`.

pub mod catalog;
pub mod error;
pub mod extraction;
pub mod frameworks;
pub mod mapping;
pub mod pattern;
pub mod requirement;
pub mod units;

pub use catalog::{Catalog, CatalogSource, FrameworkSummary};
pub use error::{CatalogError, CatalogResult};
pub use mapping::CategoryMapping;
pub use pattern::{CompiledPattern, PatternSpec, NUMBER, SCOPE_PATTERN};
pub use requirement::DisclosureRequirement;
pub use units::{CategoryUnits, UnitAlias, PASSTHROUGH_UNITS, PERCENT_ALIASES};
