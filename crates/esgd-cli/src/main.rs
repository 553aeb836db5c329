//! # esgd CLI entry point
//!
//! Parses arguments, initializes logging, builds the engine once, and
//! dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use esgd_cli::analyze::{run_analyze, AnalyzeArgs};
use esgd_cli::catalog::{run_catalog, CatalogArgs};
use esgd_cli::extract::{run_extract, ExtractArgs};
use esgd_cli::{build_engine, load_config};

/// ESG disclosure matching and metrics standardization.
///
/// Matches sustainability-report text against the CSRD, GRI, SASB, and TCFD
/// requirement catalogs, extracts and normalizes quantitative metrics, and
/// reports coverage gaps.
#[derive(Parser, Debug)]
#[command(name = "esgd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML engine configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a document: coverage, gaps, metrics, and recommendations.
    Analyze(AnalyzeArgs),

    /// Extract standardized metrics from a document.
    Extract(ExtractArgs),

    /// Inspect the requirement catalog.
    Catalog(CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");
    let engine = build_engine(config)?;
    match cli.command {
        Commands::Analyze(args) => run_analyze(&args, &engine),
        Commands::Extract(args) => run_extract(&args, &engine),
        Commands::Catalog(args) => run_catalog(&args, engine.catalog()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esgd_cli::OutputFormat;
    use esgd_core::Framework;
    use esgd_metrics::AggregationMode;

    #[test]
    fn parse_analyze_with_frameworks() {
        let cli = Cli::try_parse_from([
            "esgd",
            "analyze",
            "report.txt",
            "--framework",
            "csrd",
            "-f",
            "TCFD",
            "--sector",
            "oil & gas",
            "--year",
            "2023",
            "--format",
            "text",
        ])
        .unwrap();
        if let Commands::Analyze(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("report.txt"));
            assert_eq!(args.frameworks, vec![Framework::Csrd, Framework::Tcfd]);
            assert_eq!(args.sector.as_deref(), Some("oil & gas"));
            assert_eq!(args.year, Some(2023));
            assert_eq!(args.format, OutputFormat::Text);
        } else {
            panic!("expected analyze");
        }
    }

    #[test]
    fn parse_analyze_defaults() {
        let cli = Cli::try_parse_from(["esgd", "analyze", "-"]).unwrap();
        assert_eq!(cli.verbose, 0);
        if let Commands::Analyze(args) = cli.command {
            assert!(args.frameworks.is_empty());
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("expected analyze");
        }
    }

    #[test]
    fn parse_unknown_framework_fails() {
        assert!(Cli::try_parse_from(["esgd", "analyze", "r.txt", "--framework", "ISSB"]).is_err());
    }

    #[test]
    fn parse_extract_aggregate() {
        let cli = Cli::try_parse_from(["esgd", "-vv", "extract", "r.txt", "--aggregate", "latest"]).unwrap();
        assert_eq!(cli.verbose, 2);
        if let Commands::Extract(args) = cli.command {
            assert_eq!(args.aggregate, Some(AggregationMode::Latest));
            assert!(!args.report);
        } else {
            panic!("expected extract");
        }
    }

    #[test]
    fn parse_extract_report_conflicts_with_aggregate() {
        assert!(Cli::try_parse_from(["esgd", "extract", "r.txt", "--report", "--aggregate", "sum"]).is_err());
    }

    #[test]
    fn parse_catalog() {
        let cli = Cli::try_parse_from(["esgd", "catalog", "--framework", "gri", "--config", "esgd.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("esgd.yaml")));
        if let Commands::Catalog(args) = cli.command {
            assert_eq!(args.framework, Some(Framework::Gri));
        } else {
            panic!("expected catalog");
        }
    }

    #[test]
    fn parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["esgd"]).is_err());
    }
}
