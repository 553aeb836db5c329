//! # Disclosure Requirements

use esgd_core::Framework;
use serde::{Deserialize, Serialize};

use crate::pattern::{PatternDef, PatternSpec};

/// One discrete, individually trackable item a framework expects a report
/// to address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosureRequirement {
    /// Identifier, unique within its framework (`CSRD-E1-1`).
    pub requirement_id: String,
    /// Owning framework.
    pub framework: Framework,
    /// Pillar-level category (`Environmental`, `Social`, `Governance`).
    pub category: String,
    /// Topic within the category.
    pub subcategory: String,
    /// What the requirement asks for.
    pub description: String,
    /// Lowercase phrases whose presence evidences the requirement.
    pub keywords: Vec<String>,
    /// Whether the framework makes this disclosure mandatory.
    pub mandatory: bool,
    /// Requirement-level evidence patterns.
    pub metric_patterns: Vec<PatternSpec>,
}

impl DisclosureRequirement {
    /// Keywords of this requirement that occur in `lowercase_text`, in
    /// declaration order.
    pub fn matched_keywords<'a>(&'a self, lowercase_text: &str) -> Vec<&'a str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .filter(|kw| lowercase_text.contains(kw))
            .collect()
    }
}

/// Static declaration of a requirement in the framework tables.
#[derive(Debug, Clone, Copy)]
pub struct RequirementDef {
    /// Requirement id.
    pub id: &'static str,
    /// Category.
    pub category: &'static str,
    /// Subcategory.
    pub subcategory: &'static str,
    /// Description.
    pub description: &'static str,
    /// Keywords; lowercased on load.
    pub keywords: &'static [&'static str],
    /// Mandatory flag.
    pub mandatory: bool,
    /// Evidence patterns.
    pub patterns: &'static [PatternDef],
}

impl RequirementDef {
    /// Build the owned requirement for `framework`.
    pub fn to_requirement(&self, framework: Framework) -> DisclosureRequirement {
        DisclosureRequirement {
            requirement_id: self.id.to_string(),
            framework,
            category: self.category.to_string(),
            subcategory: self.subcategory.to_string(),
            description: self.description.to_string(),
            keywords: self.keywords.iter().map(|k| k.to_lowercase()).collect(),
            mandatory: self.mandatory,
            metric_patterns: self
                .patterns
                .iter()
                .enumerate()
                .map(|(i, p)| p.to_spec(format!("{}#{i}", self.id)))
                .collect(),
        }
    }
}
