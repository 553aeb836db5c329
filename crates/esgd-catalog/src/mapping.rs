//! # Category-to-Requirement Mapping
//!
//! Which requirements a standardized metric of a given category evidences.
//! Every id here is a catalog requirement id and is checked against the
//! catalog when it is built. Categories with no natural counterpart in a
//! framework simply have no entry for it.

use esgd_core::{Framework, MetricCategory};
use serde::{Deserialize, Serialize};

/// Requirements of one framework evidenced by metrics of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMapping {
    /// Metric category.
    pub category: MetricCategory,
    /// Target framework.
    pub framework: Framework,
    /// Requirement ids within `framework`.
    pub requirement_ids: Vec<String>,
}

type Row = (MetricCategory, Framework, &'static [&'static str]);

const TABLE: &[Row] = &[
    (
        MetricCategory::Emissions,
        Framework::Csrd,
        &["CSRD-E1-1", "CSRD-E1-2", "CSRD-E1-3"],
    ),
    (
        MetricCategory::Emissions,
        Framework::Gri,
        &["GRI-305-1", "GRI-305-2", "GRI-305-3"],
    ),
    (MetricCategory::Emissions, Framework::Sasb, &["SASB-EM-EP-110a.1"]),
    (
        MetricCategory::Emissions,
        Framework::Tcfd,
        &["TCFD-MT-A", "TCFD-MT-B", "TCFD-MT-C"],
    ),
    (MetricCategory::Energy, Framework::Csrd, &["CSRD-E1-3"]),
    (MetricCategory::Energy, Framework::Tcfd, &["TCFD-MT-A"]),
    (MetricCategory::Water, Framework::Csrd, &["CSRD-E3-1"]),
    (MetricCategory::Water, Framework::Gri, &["GRI-303-3"]),
    (MetricCategory::Waste, Framework::Csrd, &["CSRD-E5-1"]),
    (MetricCategory::Biodiversity, Framework::Csrd, &["CSRD-E4-1"]),
    (MetricCategory::Employment, Framework::Csrd, &["CSRD-S1-1"]),
    (MetricCategory::Employment, Framework::Gri, &["GRI-401-1"]),
    (MetricCategory::Diversity, Framework::Csrd, &["CSRD-S1-1"]),
    (MetricCategory::Diversity, Framework::Gri, &["GRI-405-1"]),
    (MetricCategory::HealthSafety, Framework::Csrd, &["CSRD-S1-1"]),
    (MetricCategory::HealthSafety, Framework::Gri, &["GRI-403-9"]),
    (MetricCategory::Training, Framework::Csrd, &["CSRD-S1-1"]),
    (MetricCategory::Community, Framework::Csrd, &["CSRD-S3-1"]),
    (MetricCategory::BoardComposition, Framework::Gri, &["GRI-405-1"]),
    (MetricCategory::BoardComposition, Framework::Tcfd, &["TCFD-GOV-A"]),
    (MetricCategory::Ethics, Framework::Csrd, &["CSRD-G1-1"]),
    (MetricCategory::Ethics, Framework::Gri, &["GRI-205-3"]),
    (MetricCategory::RiskManagement, Framework::Csrd, &["CSRD-E1-2"]),
    (MetricCategory::RiskManagement, Framework::Sasb, &["SASB-GEN-000.B"]),
    (
        MetricCategory::RiskManagement,
        Framework::Tcfd,
        &["TCFD-RM-A", "TCFD-RM-B"],
    ),
    (MetricCategory::Compensation, Framework::Csrd, &["CSRD-S1-1"]),
    (MetricCategory::Compliance, Framework::Csrd, &["CSRD-G1-1"]),
    (MetricCategory::Compliance, Framework::Gri, &["GRI-205-3"]),
    (MetricCategory::Financial, Framework::Tcfd, &["TCFD-STR-B"]),
];

/// The built-in mapping rows.
pub fn builtin_mappings() -> Vec<CategoryMapping> {
    TABLE
        .iter()
        .map(|(category, framework, ids)| CategoryMapping {
            category: *category,
            framework: *framework,
            requirement_ids: ids.iter().map(|id| id.to_string()).collect(),
        })
        .collect()
}
