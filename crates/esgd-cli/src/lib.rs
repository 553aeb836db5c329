//! # esgd-cli: Command-Line Interface
//!
//! ```bash
//! esgd analyze report.txt --framework CSRD --framework GRI --sector energy
//! esgd extract report.txt --year 2023 --report
//! esgd catalog --framework TCFD
//! cat report.txt | esgd analyze - --format text
//! ```
//!
//! Handlers return the process exit code; operational errors propagate as
//! `anyhow::Error` and exit with 1.

pub mod analyze;
pub mod catalog;
pub mod extract;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use esgd_engine::{Engine, EngineConfig};

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Human-readable text.
    Text,
}

/// Read UTF-8 text from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading document from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading document {}", path.display()))
}

/// Engine configuration: the YAML file when given, else defaults, with
/// environment overrides applied on top.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let base = match path {
        Some(path) => EngineConfig::from_yaml_file(path)?,
        None => EngineConfig::default(),
    };
    let config = base.with_overrides(|var| std::env::var(var).ok())?;
    Ok(config)
}

/// Build the engine from `config`.
pub fn build_engine(config: EngineConfig) -> Result<Engine> {
    Engine::new(config).context("building disclosure engine")
}

/// Print `value` as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
