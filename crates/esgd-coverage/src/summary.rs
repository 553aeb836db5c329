//! # Gap Summary

use std::collections::BTreeMap;

use esgd_core::{Framework, Severity};
use serde::{Deserialize, Serialize};

use crate::analysis::GapItem;

/// Gap counts and ids grouped by framework and severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapSummary {
    /// Number of gaps.
    pub total_gaps: usize,
    /// Critical gaps.
    pub critical_count: usize,
    /// High gaps.
    pub high_count: usize,
    /// Requirement ids per framework and severity. Every severity has an
    /// entry for each framework present.
    pub by_framework: BTreeMap<Framework, BTreeMap<Severity, Vec<String>>>,
}

impl GapSummary {
    /// Summarize `gaps`.
    pub fn from_gaps(gaps: &[GapItem]) -> Self {
        let mut by_framework: BTreeMap<Framework, BTreeMap<Severity, Vec<String>>> = BTreeMap::new();
        for gap in gaps {
            by_framework
                .entry(gap.framework)
                .or_insert_with(|| Severity::all().iter().map(|s| (*s, Vec::new())).collect())
                .entry(gap.severity)
                .or_default()
                .push(gap.requirement_id.clone());
        }
        let count = |severity: Severity| gaps.iter().filter(|g| g.severity == severity).count();
        Self {
            total_gaps: gaps.len(),
            critical_count: count(Severity::Critical),
            high_count: count(Severity::High),
            by_framework,
        }
    }

    /// Number of gaps with `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.by_framework
            .values()
            .filter_map(|by_severity| by_severity.get(&severity))
            .map(Vec::len)
            .sum()
    }
}
