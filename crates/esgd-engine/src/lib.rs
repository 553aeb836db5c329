//! # esgd-engine: Disclosure Matching and Metrics Engine
//!
//! [`Engine`] wires the catalog, keyword index, metric pipeline, and
//! coverage analyzer over one shared [`Catalog`](esgd_catalog::Catalog).
//! Build it once at startup; construction is the only fallible step.
//!
//! ```no_run
//! use esgd_engine::{AnalysisRequest, Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default())?;
//! let analysis = engine.analyze_document("Scope 1 emissions: 45,000 tCO2e.", &AnalysisRequest::default());
//! println!("{} gaps", analysis.gaps.len());
//! # Ok::<(), esgd_engine::EngineError>(())
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;

pub use config::{ConfigError, EngineConfig, ENV_MAX_RECOMMENDATIONS, ENV_REFERENCE_YEAR};
pub use engine::{sha256_hex, AnalysisRequest, DocumentAnalysis, Engine};
pub use error::{EngineError, EngineResult};
