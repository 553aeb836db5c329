//! # Requirement Findings
//!
//! Expands a found-requirement set into per-requirement detail for reports:
//! which keywords matched, a keyword-count confidence, and the raw
//! value/unit pairs captured by the requirement's own evidence patterns.

use esgd_catalog::{Catalog, CompiledPattern};
use esgd_core::Framework;
use serde::{Deserialize, Serialize};

use crate::index::FoundRequirements;

/// Keyword confidence floor for a requirement found with no keyword hits.
const BASE_CONFIDENCE: f64 = 0.3;
/// Added per matched keyword.
const PER_KEYWORD: f64 = 0.1;
/// Keyword confidence ceiling.
const MAX_CONFIDENCE: f64 = 0.9;

/// A raw value captured by a requirement-level pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementEvidence {
    /// Pattern that produced the capture.
    pub pattern_id: String,
    /// Captured numeric text, verbatim.
    pub value: String,
    /// Captured or declared unit; empty when the pattern has none.
    pub unit: String,
}

/// Detail for one found requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementFinding {
    /// Requirement id.
    pub requirement_id: String,
    /// Framework.
    pub framework: Framework,
    /// Requirement category.
    pub category: String,
    /// Requirement subcategory.
    pub subcategory: String,
    /// Requirement description.
    pub description: String,
    /// Keywords present in the document, in catalog order.
    pub keywords_matched: Vec<String>,
    /// `min(0.9, 0.3 + 0.1 × keywords_matched)`.
    pub confidence: f64,
    /// Captures of the requirement's evidence patterns.
    pub evidence: Vec<RequirementEvidence>,
}

/// Findings for every requirement in `found`, in catalog order.
pub fn findings(catalog: &Catalog, text: &str, found: &FoundRequirements) -> Vec<RequirementFinding> {
    let lowered = text.to_lowercase();
    let mut out = Vec::new();
    for (framework, ids) in found {
        for req in catalog.all_requirements(*framework) {
            if !ids.contains(&req.requirement_id) {
                continue;
            }
            let keywords_matched: Vec<String> = req
                .matched_keywords(&lowered)
                .into_iter()
                .map(str::to_string)
                .collect();
            let evidence = catalog
                .requirement_patterns(*framework, &req.requirement_id)
                .iter()
                .flat_map(|p| capture_evidence(p, text))
                .collect();
            out.push(RequirementFinding {
                requirement_id: req.requirement_id.clone(),
                framework: *framework,
                category: req.category.clone(),
                subcategory: req.subcategory.clone(),
                description: req.description.clone(),
                confidence: keyword_confidence(keywords_matched.len()),
                keywords_matched,
                evidence,
            });
        }
    }
    out
}

fn keyword_confidence(matched: usize) -> f64 {
    let raw = BASE_CONFIDENCE + PER_KEYWORD * matched as f64;
    (raw.min(MAX_CONFIDENCE) * 100.0).round() / 100.0
}

fn capture_evidence(pattern: &CompiledPattern, text: &str) -> Vec<RequirementEvidence> {
    let spec = &pattern.spec;
    pattern
        .regex
        .captures_iter(text)
        .filter_map(|caps| {
            let value = caps.get(spec.value_group)?.as_str().trim().to_string();
            let unit = spec
                .unit_group
                .and_then(|g| caps.get(g))
                .map(|m| m.as_str().to_string())
                .or_else(|| spec.default_unit.clone())
                .unwrap_or_default();
            Some(RequirementEvidence {
                pattern_id: spec.id.clone(),
                value,
                unit,
            })
        })
        .collect()
}
