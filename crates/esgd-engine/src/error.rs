//! Engine construction errors. Analysis itself never fails.

use esgd_catalog::CatalogError;
use esgd_metrics::MetricsError;
use thiserror::Error;

use crate::config::ConfigError;

/// Failure constructing an [`Engine`](crate::Engine).
#[derive(Error, Debug)]
pub enum EngineError {
    /// The catalog failed integrity checks.
    #[error("catalog integrity: {0}")]
    Catalog(#[from] CatalogError),

    /// A metrics component failed to build.
    #[error("metrics: {0}")]
    Metrics(#[from] MetricsError),

    /// The configuration is invalid.
    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for engine construction.
pub type EngineResult<T> = Result<T, EngineError>;
