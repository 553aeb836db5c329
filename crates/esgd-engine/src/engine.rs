//! # Engine
//!
//! Built once, then shared. Every method takes `&self` and performs no
//! I/O, so one `Engine` serves any number of threads.
//!
//! ## Pipeline
//!
//! ```text
//! text ─┬─ KeywordIndex::find_relevant ─────────────────────────┐
//!       └─ extract ─ standardize ─ refine ─ framework mappings ─┴─ analyze
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use esgd_catalog::Catalog;
use esgd_core::Framework;
use esgd_coverage::{
    AnalysisResult, CoverageAnalyzer, CoverageResult, GapItem, GapSummary, IndustrySector,
};
use esgd_matcher::{findings, FoundRequirements, KeywordIndex, PillarScores, RequirementFinding};
use esgd_metrics::{
    ConfidenceRefiner, ExtractedMetric, MetricExtractor, MetricsReport, StandardizedMetric,
    Standardizer,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::EngineConfig;
use crate::error::EngineResult;

/// Options for [`Engine::analyze_document`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    /// Frameworks to analyze; empty means all.
    pub frameworks: BTreeSet<Framework>,
    /// Industry sector of the reporting company.
    pub industry_sector: Option<String>,
    /// Reporting year to attach to every metric instead of detecting one.
    pub reporting_year: Option<i32>,
}

/// Everything the engine derives from one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Lowercase hex SHA-256 of the document text.
    pub document_sha256: String,
    /// Frameworks analyzed.
    pub frameworks: Vec<Framework>,
    /// Industry sector applied to severities.
    pub industry_sector: Option<String>,
    /// Found requirements per framework: keyword matches and metric
    /// mappings combined.
    pub requirements_found: FoundRequirements,
    /// Keyword-matched requirements with evidence.
    pub findings: Vec<RequirementFinding>,
    /// Refined metrics.
    pub metrics: Vec<StandardizedMetric>,
    /// Metric summary.
    pub metrics_report: MetricsReport,
    /// Coverage per framework.
    pub coverage: Vec<CoverageResult>,
    /// Missing requirements.
    pub gaps: Vec<GapItem>,
    /// Gap counts.
    pub gap_summary: GapSummary,
    /// Recommendations.
    pub recommendations: Vec<String>,
    /// ESG pillar keyword scores.
    pub pillar_scores: PillarScores,
}

/// The disclosure matching and metrics engine.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<Catalog>,
    index: KeywordIndex,
    extractor: MetricExtractor,
    standardizer: Standardizer,
    refiner: ConfidenceRefiner,
    analyzer: CoverageAnalyzer,
    config: EngineConfig,
}

impl Engine {
    /// Load the built-in catalog and build every component.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        let catalog = Arc::new(Catalog::load()?);
        Self::with_catalog(catalog, config)
    }

    /// Build every component over an existing catalog.
    pub fn with_catalog(catalog: Arc<Catalog>, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let index = KeywordIndex::build(&catalog);
        let extractor = MetricExtractor::new(Arc::clone(&catalog), config.reference_year)?;
        let standardizer = Standardizer::new(Arc::clone(&catalog))?;
        let refiner = ConfidenceRefiner::new()?;
        let analyzer = CoverageAnalyzer::new(Arc::clone(&catalog), config.max_recommendations);
        tracing::info!(
            requirements = catalog.requirement_count(),
            keywords = index.keyword_count(),
            extraction_patterns = catalog.extraction_patterns().len(),
            excluded_patterns = catalog.excluded_patterns().len(),
            reference_year = config.reference_year,
            "engine ready"
        );
        Ok(Self {
            catalog,
            index,
            extractor,
            standardizer,
            refiner,
            analyzer,
            config,
        })
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Requirements whose keywords occur in `text`.
    pub fn find_relevant(&self, text: &str) -> FoundRequirements {
        self.index.find_relevant(text)
    }

    /// Raw metric candidates, before standardization.
    pub fn extract_raw(&self, text: &str, year: Option<i32>) -> Vec<ExtractedMetric> {
        self.extractor.extract(text, year)
    }

    /// Metrics in `text`, standardized, deduplicated, and refined.
    pub fn extract(&self, text: &str, year: Option<i32>) -> Vec<StandardizedMetric> {
        let raw = self.extractor.extract(text, year);
        let standardized = self.standardizer.standardize_all(raw);
        self.refiner.refine(standardized)
    }

    /// Coverage, gaps, and recommendations from precomputed inputs.
    pub fn analyze(
        &self,
        keyword_found: &FoundRequirements,
        metrics: &[StandardizedMetric],
        frameworks: &BTreeSet<Framework>,
        industry_sector: Option<&str>,
    ) -> AnalysisResult {
        let sector = industry_sector.map(IndustrySector::parse);
        self.analyzer
            .analyze(keyword_found, metrics, frameworks, sector.as_ref())
    }

    /// Run the whole pipeline over one document.
    pub fn analyze_document(&self, text: &str, request: &AnalysisRequest) -> DocumentAnalysis {
        let frameworks = self.analyzer.resolve_frameworks(&request.frameworks);
        let keyword_found: FoundRequirements = self
            .find_relevant(text)
            .into_iter()
            .filter(|(fw, _)| frameworks.contains(fw))
            .collect();
        let metrics = self.extract(text, request.reporting_year);
        let sector = request.industry_sector.as_deref().map(IndustrySector::parse);

        let result = self
            .analyzer
            .analyze(&keyword_found, &metrics, &frameworks, sector.as_ref());
        let requirements_found = self.analyzer.found_union(&keyword_found, &metrics, &frameworks);

        let analysis = DocumentAnalysis {
            document_sha256: sha256_hex(text),
            frameworks: frameworks.into_iter().collect(),
            industry_sector: sector.map(|s| s.to_string()),
            requirements_found,
            findings: findings(&self.catalog, text, &keyword_found),
            metrics_report: MetricsReport::from_metrics(&metrics),
            metrics,
            gap_summary: GapSummary::from_gaps(&result.gaps),
            coverage: result.coverage,
            gaps: result.gaps,
            recommendations: result.recommendations,
            pillar_scores: PillarScores::score(text),
        };
        tracing::debug!(
            document = %analysis.document_sha256,
            metrics = analysis.metrics.len(),
            gaps = analysis.gaps.len(),
            "document analyzed"
        );
        analysis
    }

    /// Analyze independent documents in parallel. Results keep input order.
    pub fn analyze_batch<S>(&self, texts: &[S], request: &AnalysisRequest) -> Vec<DocumentAnalysis>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze_document(text.as_ref(), request))
            .collect()
    }
}

/// Lowercase hex SHA-256 of `text`.
pub fn sha256_hex(text: &str) -> String {
    let hash = Sha256::digest(text.as_bytes());
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use esgd_core::{EmissionsScope, MetricCategory, Severity};
    use std::sync::OnceLock;

    const SCENARIO: &str = "Scope 1 emissions: 45,000 tCO2e. Energy consumption: 450 GWh \
                            (35% from renewable sources). Water usage: 2.5 million cubic meters.";

    fn engine() -> &'static Engine {
        static ENGINE: OnceLock<Engine> = OnceLock::new();
        ENGINE.get_or_init(|| {
            Engine::new(EngineConfig {
                reference_year: 2024,
                max_recommendations: 10,
            })
            .unwrap()
        })
    }

    fn only(frameworks: &[Framework]) -> BTreeSet<Framework> {
        frameworks.iter().copied().collect()
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn sha256_of_empty_string() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Engine::new(EngineConfig {
            reference_year: 1950,
            max_recommendations: 10,
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("config:"));
    }

    #[test]
    fn scenario_metrics() {
        let metrics = engine().extract(SCENARIO, None);
        let emissions = metrics
            .iter()
            .find(|m| m.category() == MetricCategory::Emissions)
            .unwrap();
        assert_eq!(emissions.normalized_value, 45_000.0);
        assert_eq!(emissions.normalized_unit, "tCO2e");
        assert_eq!(emissions.extracted.scope, Some(EmissionsScope::One));

        let energy = metrics
            .iter()
            .find(|m| m.metric_name() == "Energy")
            .unwrap();
        assert_eq!(energy.normalized_value, 450_000.0);
        assert_eq!(energy.normalized_unit, "MWh");

        let water = metrics
            .iter()
            .find(|m| m.category() == MetricCategory::Water)
            .unwrap();
        assert_eq!(water.normalized_value, 2_500.0);
        assert_eq!(water.normalized_unit, "m³");

        assert!(metrics.iter().all(|m| m.confidence <= 0.95 && m.confidence >= 0.1));
    }

    #[test]
    fn keyword_case_insensitive_substring() {
        let found = engine().find_relevant("Our SCOPE 1 emissions were flat.");
        assert!(found[&Framework::Csrd].contains("CSRD-E1-3"));
        let found = engine().find_relevant("We only talk about scope one.");
        assert!(found
            .get(&Framework::Csrd)
            .map_or(true, |ids| !ids.contains("CSRD-E1-3")));
    }

    #[test]
    fn empty_document() {
        let analysis = engine().analyze_document("", &AnalysisRequest::default());
        assert_eq!(analysis.frameworks.len(), 4);
        assert!(analysis.metrics.is_empty());
        assert!(analysis.findings.is_empty());
        for coverage in &analysis.coverage {
            assert_eq!(coverage.requirements_found, 0);
            assert_eq!(coverage.coverage_percentage, 0.0);
        }
        assert_eq!(analysis.gaps.len(), engine().catalog().requirement_count());
        assert_eq!(analysis.gap_summary.total_gaps, analysis.gaps.len());
    }

    #[test]
    fn requested_frameworks_limit_everything() {
        let request = AnalysisRequest {
            frameworks: only(&[Framework::Tcfd]),
            industry_sector: Some("Energy".into()),
            reporting_year: Some(2023),
        };
        let analysis = engine().analyze_document(SCENARIO, &request);
        assert_eq!(analysis.frameworks, vec![Framework::Tcfd]);
        assert_eq!(analysis.industry_sector.as_deref(), Some("energy"));
        assert!(analysis.findings.iter().all(|f| f.framework == Framework::Tcfd));
        assert!(analysis.requirements_found.keys().all(|fw| *fw == Framework::Tcfd));
        assert!(analysis.metrics.iter().all(|m| m.year() == Some(2023)));
        // emissions metrics map onto TCFD metrics and targets
        assert!(analysis.requirements_found[&Framework::Tcfd].contains("TCFD-MT-B"));
    }

    #[test]
    fn csrd_mandatory_gaps_are_critical() {
        let analysis = engine().analyze_document(
            "Board oversight of data privacy and supply chain matters.",
            &AnalysisRequest {
                industry_sector: Some("technology".into()),
                ..AnalysisRequest::default()
            },
        );
        assert!(analysis
            .gaps
            .iter()
            .filter(|g| g.framework == Framework::Csrd)
            .all(|g| g.severity == Severity::Critical));
    }

    #[test]
    fn analyze_matches_document_pipeline() {
        let keyword_found = engine().find_relevant(SCENARIO);
        let metrics = engine().extract(SCENARIO, None);
        let direct = engine().analyze(&keyword_found, &metrics, &BTreeSet::new(), None);
        let whole = engine().analyze_document(SCENARIO, &AnalysisRequest::default());
        assert_eq!(direct.coverage, whole.coverage);
        assert_eq!(direct.gaps, whole.gaps);
        assert_eq!(direct.recommendations, whole.recommendations);
    }

    #[test]
    fn batch_preserves_order_and_matches_single_runs() {
        let texts = vec![SCENARIO.to_string(), String::new(), "Board diversity report".to_string()];
        let request = AnalysisRequest::default();
        let batch = engine().analyze_batch(&texts, &request);
        assert_eq!(batch.len(), 3);
        for (text, analysis) in texts.iter().zip(&batch) {
            assert_eq!(analysis, &engine().analyze_document(text, &request));
        }
    }

    #[test]
    fn deterministic() {
        let request = AnalysisRequest::default();
        assert_eq!(
            engine().analyze_document(SCENARIO, &request),
            engine().analyze_document(SCENARIO, &request)
        );
    }

    #[test]
    fn document_analysis_serializes() {
        let analysis = engine().analyze_document(SCENARIO, &AnalysisRequest::default());
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["document_sha256"].as_str().map(str::len), Some(64));
        assert_eq!(json["frameworks"][0], "CSRD");
        assert!(json["metrics"].as_array().is_some_and(|m| !m.is_empty()));
    }
}
