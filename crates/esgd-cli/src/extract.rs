//! # extract: Metric Extraction

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use esgd_engine::Engine;
use esgd_metrics::{aggregate, AggregationMode, MetricsReport};

use crate::{print_json, read_input};

/// Arguments for `esgd extract`.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Document to read, or `-` for stdin.
    pub file: PathBuf,

    /// Reporting year to attach to every metric.
    #[arg(long)]
    pub year: Option<i32>,

    /// Print a grouped report instead of the metric list.
    #[arg(long, conflicts_with = "aggregate")]
    pub report: bool,

    /// Combine values of the same metric (sum, average, latest).
    #[arg(long)]
    pub aggregate: Option<AggregationMode>,

    /// Print raw candidates, before standardization and refinement.
    #[arg(long, conflicts_with_all = ["report", "aggregate"])]
    pub raw: bool,
}

/// Execute `esgd extract`.
pub fn run_extract(args: &ExtractArgs, engine: &Engine) -> Result<u8> {
    let text = read_input(&args.file)?;
    if args.raw {
        print_json(&engine.extract_raw(&text, args.year))?;
        return Ok(0);
    }
    let metrics = engine.extract(&text, args.year);
    tracing::info!(metrics = metrics.len(), "extraction complete");
    if args.report {
        print_json(&MetricsReport::from_metrics(&metrics))?;
    } else if let Some(mode) = args.aggregate {
        print_json(&aggregate(&metrics, mode))?;
    } else {
        print_json(&metrics)?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use esgd_engine::EngineConfig;

    #[test]
    fn run_modes() {
        let engine = Engine::new(EngineConfig {
            reference_year: 2024,
            max_recommendations: 10,
        })
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "Energy consumption: 450 GWh. Waste generated: 50 kg").unwrap();

        let mut args = ExtractArgs {
            file: path,
            year: Some(2023),
            report: false,
            aggregate: None,
            raw: false,
        };
        assert_eq!(run_extract(&args, &engine).unwrap(), 0);
        args.report = true;
        assert_eq!(run_extract(&args, &engine).unwrap(), 0);
        args.report = false;
        args.aggregate = Some(AggregationMode::Sum);
        assert_eq!(run_extract(&args, &engine).unwrap(), 0);
        args.aggregate = None;
        args.raw = true;
        assert_eq!(run_extract(&args, &engine).unwrap(), 0);
    }
}
