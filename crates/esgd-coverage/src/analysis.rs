//! # Coverage and Gap Analysis
//!
//! A requirement counts as found for a framework when the keyword matcher
//! found it, or when any standardized metric maps to it. Ids outside the
//! catalog are ignored.
//!
//! ## Severity
//!
//! Rules apply in order; the first that matches wins:
//!
//! 1. mandatory CSRD requirement: `critical`.
//! 2. the sector's description phrase (see [`IndustrySector::severity_rule`]).
//! 3. `high` when mandatory, else `medium`.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use esgd_catalog::{Catalog, DisclosureRequirement};
use esgd_core::{Framework, Severity};
use esgd_matcher::FoundRequirements;
use esgd_metrics::StandardizedMetric;
use serde::{Deserialize, Serialize};

use crate::recommend::recommendations;
use crate::sector::IndustrySector;

/// Coverage of one framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    /// Framework measured.
    pub framework: Framework,
    /// Requirements found.
    pub requirements_found: usize,
    /// Requirements in the catalog.
    pub requirements_total: usize,
    /// Mandatory requirements found.
    pub mandatory_met: usize,
    /// Mandatory requirements in the catalog.
    pub mandatory_total: usize,
    /// `requirements_found / requirements_total * 100`, or 0.
    pub coverage_percentage: f64,
}

impl CoverageResult {
    /// Mandatory requirements not found.
    pub fn mandatory_missing(&self) -> usize {
        self.mandatory_total - self.mandatory_met
    }
}

/// A requirement the document does not evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapItem {
    /// Framework of the requirement.
    pub framework: Framework,
    /// Missing requirement.
    pub requirement_id: String,
    /// Requirement category.
    pub category: String,
    /// Requirement subcategory.
    pub subcategory: String,
    /// Requirement description.
    pub description: String,
    /// Whether the requirement is mandatory.
    pub mandatory: bool,
    /// Urgency.
    pub severity: Severity,
}

/// Coverage, gaps, and recommendations for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One entry per requested framework, in framework order.
    pub coverage: Vec<CoverageResult>,
    /// Gaps in framework order, then catalog order.
    pub gaps: Vec<GapItem>,
    /// Recommendations in generation order.
    pub recommendations: Vec<String>,
}

/// Severity of a missing `requirement`.
pub fn severity(requirement: &DisclosureRequirement, sector: Option<&IndustrySector>) -> Severity {
    if requirement.framework == Framework::Csrd && requirement.mandatory {
        return Severity::Critical;
    }
    if let Some((phrase, severity)) = sector.and_then(IndustrySector::severity_rule) {
        if requirement.description.to_lowercase().contains(phrase) {
            return severity;
        }
    }
    if requirement.mandatory {
        Severity::High
    } else {
        Severity::Medium
    }
}

/// Computes coverage and gaps over a shared catalog.
#[derive(Debug, Clone)]
pub struct CoverageAnalyzer {
    catalog: Arc<Catalog>,
    max_recommendations: usize,
}

impl CoverageAnalyzer {
    /// Default recommendation cap.
    pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 10;

    /// Analyzer over `catalog` emitting at most `max_recommendations`.
    pub fn new(catalog: Arc<Catalog>, max_recommendations: usize) -> Self {
        Self {
            catalog,
            max_recommendations,
        }
    }

    /// Frameworks to analyze: `requested`, or every framework when empty.
    pub fn resolve_frameworks(&self, requested: &BTreeSet<Framework>) -> BTreeSet<Framework> {
        if requested.is_empty() {
            self.catalog.all_frameworks().iter().copied().collect()
        } else {
            requested.clone()
        }
    }

    /// Union of keyword findings and metric mappings, per framework,
    /// restricted to catalog ids.
    pub fn found_union(
        &self,
        keyword_found: &FoundRequirements,
        metrics: &[StandardizedMetric],
        frameworks: &BTreeSet<Framework>,
    ) -> FoundRequirements {
        let mut union = FoundRequirements::new();
        for framework in frameworks {
            let from_keywords = keyword_found.get(framework).into_iter().flatten();
            let from_metrics = metrics
                .iter()
                .filter_map(|m| m.framework_mappings.get(framework))
                .flatten();
            let ids: BTreeSet<String> = from_keywords
                .chain(from_metrics)
                .filter(|id| self.catalog.contains(*framework, id))
                .cloned()
                .collect();
            union.insert(*framework, ids);
        }
        union
    }

    /// Coverage of `framework` given its found set.
    pub fn coverage(&self, framework: Framework, found: &BTreeSet<String>) -> CoverageResult {
        let requirements = self.catalog.all_requirements(framework);
        let is_found = |r: &&DisclosureRequirement| found.contains(&r.requirement_id);
        let requirements_total = requirements.len();
        let requirements_found = requirements.iter().filter(is_found).count();
        let mandatory_total = requirements.iter().filter(|r| r.mandatory).count();
        let mandatory_met = requirements
            .iter()
            .filter(|r| r.mandatory)
            .filter(is_found)
            .count();
        let coverage_percentage = if requirements_total == 0 {
            0.0
        } else {
            requirements_found as f64 / requirements_total as f64 * 100.0
        };
        CoverageResult {
            framework,
            requirements_found,
            requirements_total,
            mandatory_met,
            mandatory_total,
            coverage_percentage,
        }
    }

    /// Gaps of `framework` given its found set, in catalog order.
    pub fn gaps(
        &self,
        framework: Framework,
        found: &BTreeSet<String>,
        sector: Option<&IndustrySector>,
    ) -> Vec<GapItem> {
        self.catalog
            .all_requirements(framework)
            .iter()
            .filter(|r| !found.contains(&r.requirement_id))
            .map(|r| GapItem {
                framework,
                requirement_id: r.requirement_id.clone(),
                category: r.category.clone(),
                subcategory: r.subcategory.clone(),
                description: r.description.clone(),
                mandatory: r.mandatory,
                severity: severity(r, sector),
            })
            .collect()
    }

    /// Full analysis over the requested frameworks (all when empty).
    pub fn analyze(
        &self,
        keyword_found: &FoundRequirements,
        metrics: &[StandardizedMetric],
        frameworks: &BTreeSet<Framework>,
        sector: Option<&IndustrySector>,
    ) -> AnalysisResult {
        let frameworks = self.resolve_frameworks(frameworks);
        let found = self.found_union(keyword_found, metrics, &frameworks);
        let empty = BTreeSet::new();

        let mut coverage = Vec::with_capacity(frameworks.len());
        let mut gaps = Vec::new();
        for framework in &frameworks {
            let found_ids = found.get(framework).unwrap_or(&empty);
            coverage.push(self.coverage(*framework, found_ids));
            gaps.extend(self.gaps(*framework, found_ids, sector));
        }
        let recommendations = recommendations(&coverage, &gaps, self.max_recommendations);

        tracing::debug!(
            frameworks = frameworks.len(),
            gaps = gaps.len(),
            recommendations = recommendations.len(),
            "coverage analysis complete"
        );
        AnalysisResult {
            coverage,
            gaps,
            recommendations,
        }
    }
}

/// Gaps grouped by framework, preserving order within each group.
pub fn gaps_by_framework(gaps: &[GapItem]) -> BTreeMap<Framework, Vec<&GapItem>> {
    let mut grouped: BTreeMap<Framework, Vec<&GapItem>> = BTreeMap::new();
    for gap in gaps {
        grouped.entry(gap.framework).or_default().push(gap);
    }
    grouped
}
