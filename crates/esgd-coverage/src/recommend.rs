//! # Recommendations
//!
//! Generated in a fixed order and truncated to the cap:
//!
//! 1. each framework under [`LOW_COVERAGE`] percent coverage.
//! 2. each distinct category among critical gaps, in first-seen order.
//! 3. one combined line naming the three categories with the most high
//!    gaps (ties broken by first appearance).
//! 4. each framework over [`STRONG_COVERAGE`] percent coverage.

use esgd_core::Severity;

use crate::analysis::{CoverageResult, GapItem};

/// Coverage below which a framework gets an improvement recommendation.
pub const LOW_COVERAGE: f64 = 50.0;

/// Coverage above which a framework gets a certification recommendation.
pub const STRONG_COVERAGE: f64 = 80.0;

const PRIORITY_CATEGORIES: usize = 3;

/// Recommendations for an analysis, at most `limit`.
pub fn recommendations(coverage: &[CoverageResult], gaps: &[GapItem], limit: usize) -> Vec<String> {
    let mut out = Vec::new();

    for c in coverage.iter().filter(|c| c.coverage_percentage < LOW_COVERAGE) {
        out.push(format!(
            "Improve {} disclosure: Currently at {:.1}% coverage. Focus on {} missing mandatory requirements.",
            c.framework,
            c.coverage_percentage,
            c.mandatory_missing()
        ));
    }

    for category in distinct_categories(gaps, Severity::Critical) {
        out.push(format!(
            "Critical gap in {category}: Immediate action required to meet regulatory requirements."
        ));
    }

    let priority = top_categories(gaps, Severity::High, PRIORITY_CATEGORIES);
    if !priority.is_empty() {
        out.push(format!("Priority areas for improvement: {}", priority.join(", ")));
    }

    for c in coverage.iter().filter(|c| c.coverage_percentage > STRONG_COVERAGE) {
        out.push(format!(
            "Strong {} compliance ({:.1}%). Consider pursuing certification or external verification.",
            c.framework, c.coverage_percentage
        ));
    }

    out.truncate(limit);
    out
}

fn distinct_categories(gaps: &[GapItem], severity: Severity) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for gap in gaps.iter().filter(|g| g.severity == severity) {
        if !seen.contains(&gap.category.as_str()) {
            seen.push(&gap.category);
        }
    }
    seen
}

fn top_categories(gaps: &[GapItem], severity: Severity, n: usize) -> Vec<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for gap in gaps.iter().filter(|g| g.severity == severity) {
        match counts.iter_mut().find(|(c, _)| *c == gap.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((&gap.category, 1)),
        }
    }
    // stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(n).map(|(c, _)| c).collect()
}
