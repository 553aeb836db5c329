//! # analyze: Full Document Analysis

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use esgd_core::Framework;
use esgd_engine::{AnalysisRequest, DocumentAnalysis, Engine};

use crate::{print_json, read_input, OutputFormat};

/// Arguments for `esgd analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Document to analyze, or `-` for stdin.
    pub file: PathBuf,

    /// Framework to analyze (repeatable). Defaults to all.
    #[arg(long = "framework", short = 'f')]
    pub frameworks: Vec<Framework>,

    /// Industry sector (e.g. energy, technology, manufacturing).
    #[arg(long)]
    pub sector: Option<String>,

    /// Reporting year to attach to every metric.
    #[arg(long)]
    pub year: Option<i32>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    /// The engine request these arguments describe.
    pub fn request(&self) -> AnalysisRequest {
        AnalysisRequest {
            frameworks: self.frameworks.iter().copied().collect::<BTreeSet<_>>(),
            industry_sector: self.sector.clone(),
            reporting_year: self.year,
        }
    }
}

/// Execute `esgd analyze`.
pub fn run_analyze(args: &AnalyzeArgs, engine: &Engine) -> Result<u8> {
    let text = read_input(&args.file)?;
    let analysis = engine.analyze_document(&text, &args.request());
    match args.format {
        OutputFormat::Json => print_json(&analysis)?,
        OutputFormat::Text => print!("{}", render_text(&analysis)),
    }
    Ok(0)
}

/// Human-readable rendering of an analysis.
pub fn render_text(analysis: &DocumentAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("Document {}\n\n", analysis.document_sha256));

    out.push_str("Coverage\n");
    for c in &analysis.coverage {
        out.push_str(&format!(
            "  {:<5} {:>5.1}%  {}/{} requirements, {}/{} mandatory\n",
            c.framework.as_str(),
            c.coverage_percentage,
            c.requirements_found,
            c.requirements_total,
            c.mandatory_met,
            c.mandatory_total
        ));
    }

    out.push_str(&format!("\nMetrics ({})\n", analysis.metrics.len()));
    for m in &analysis.metrics {
        let year = m.year().map(|y| format!(" [{y}]")).unwrap_or_default();
        let target = if m.is_target { " (target)" } else { "" };
        out.push_str(&format!(
            "  {}: {} {}{}{}  confidence {:.2}\n",
            m.metric_name(),
            m.normalized_value,
            m.normalized_unit,
            year,
            target,
            m.confidence
        ));
    }

    out.push_str(&format!(
        "\nGaps ({} total, {} critical, {} high)\n",
        analysis.gap_summary.total_gaps,
        analysis.gap_summary.critical_count,
        analysis.gap_summary.high_count
    ));
    for g in &analysis.gaps {
        out.push_str(&format!(
            "  [{}] {} {}: {}\n",
            g.severity, g.framework, g.requirement_id, g.description
        ));
    }

    if !analysis.recommendations.is_empty() {
        out.push_str("\nRecommendations\n");
        for r in &analysis.recommendations {
            out.push_str(&format!("  - {r}\n"));
        }
    }

    let p = &analysis.pillar_scores;
    out.push_str(&format!(
        "\nPillar scores: E {:.1}  S {:.1}  G {:.1}  overall {:.1}\n",
        p.environmental, p.social, p.governance, p.overall
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use esgd_engine::EngineConfig;

    fn engine() -> Engine {
        Engine::new(EngineConfig {
            reference_year: 2024,
            max_recommendations: 10,
        })
        .unwrap()
    }

    #[test]
    fn request_from_args() {
        let args = AnalyzeArgs {
            file: PathBuf::from("-"),
            frameworks: vec![Framework::Gri, Framework::Csrd, Framework::Gri],
            sector: Some("energy".into()),
            year: Some(2023),
            format: OutputFormat::Text,
        };
        let request = args.request();
        assert_eq!(request.frameworks.len(), 2);
        assert_eq!(request.industry_sector.as_deref(), Some("energy"));
        assert_eq!(request.reporting_year, Some(2023));
    }

    #[test]
    fn text_rendering_lists_sections() {
        let analysis = engine().analyze_document(
            "Scope 1 emissions: 45,000 tCO2e.",
            &AnalysisRequest {
                frameworks: [Framework::Tcfd].into_iter().collect(),
                ..AnalysisRequest::default()
            },
        );
        let text = render_text(&analysis);
        assert!(text.contains("Coverage\n  TCFD"));
        assert!(text.contains("Emissions - Scope 1: 45000 tCO2e"));
        assert!(text.contains("Gaps ("));
        assert!(text.contains("Pillar scores:"));
    }

    #[test]
    fn run_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "Water usage: 2.5 million cubic meters.").unwrap();
        let args = AnalyzeArgs {
            file: path,
            frameworks: Vec::new(),
            sector: None,
            year: None,
            format: OutputFormat::Json,
        };
        assert_eq!(run_analyze(&args, &engine()).unwrap(), 0);
    }

    #[test]
    fn run_on_missing_file_fails() {
        let args = AnalyzeArgs {
            file: PathBuf::from("/nonexistent/esgd/report.txt"),
            frameworks: Vec::new(),
            sector: None,
            year: None,
            format: OutputFormat::Json,
        };
        assert!(run_analyze(&args, &engine()).is_err());
    }
}
