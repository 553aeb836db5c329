//! # Metric Reports and Aggregation
//!
//! Summaries over a refined metric list: grouping by category and year,
//! the high-confidence subset, and per-metric aggregation.

use std::collections::BTreeMap;
use std::str::FromStr;

use esgd_core::{EmissionsScope, MetricCategory};
use serde::{Deserialize, Serialize};

use crate::standardize::StandardizedMetric;

/// Confidence at or above which a metric counts as high confidence.
pub const HIGH_CONFIDENCE: f64 = 0.8;

/// Compact view of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Display name.
    pub metric_name: String,
    /// Normalized value.
    pub value: f64,
    /// Normalized unit.
    pub unit: String,
    /// Reporting year.
    pub year: Option<i32>,
    /// Emissions scope.
    pub scope: Option<EmissionsScope>,
    /// Final confidence.
    pub confidence: f64,
    /// Forward-looking target.
    pub is_target: bool,
}

impl From<&StandardizedMetric> for MetricSummary {
    fn from(metric: &StandardizedMetric) -> Self {
        Self {
            metric_name: metric.extracted.metric_name.clone(),
            value: metric.normalized_value,
            unit: metric.normalized_unit.clone(),
            year: metric.extracted.year,
            scope: metric.extracted.scope,
            confidence: metric.confidence,
            is_target: metric.is_target,
        }
    }
}

/// Grouped view of a metric list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Number of metrics.
    pub total_metrics: usize,
    /// Metrics per category.
    pub by_category: BTreeMap<MetricCategory, Vec<MetricSummary>>,
    /// Metric names per reporting year.
    pub by_year: BTreeMap<i32, Vec<String>>,
    /// Metrics at or above [`HIGH_CONFIDENCE`].
    pub high_confidence: Vec<MetricSummary>,
    /// Target metrics.
    pub targets: Vec<MetricSummary>,
}

impl MetricsReport {
    /// Build a report over `metrics`, preserving their order within groups.
    pub fn from_metrics(metrics: &[StandardizedMetric]) -> Self {
        let mut by_category: BTreeMap<MetricCategory, Vec<MetricSummary>> = BTreeMap::new();
        let mut by_year: BTreeMap<i32, Vec<String>> = BTreeMap::new();
        let mut high_confidence = Vec::new();
        let mut targets = Vec::new();

        for metric in metrics {
            let summary = MetricSummary::from(metric);
            if let Some(year) = summary.year {
                by_year.entry(year).or_default().push(summary.metric_name.clone());
            }
            if summary.confidence >= HIGH_CONFIDENCE {
                high_confidence.push(summary.clone());
            }
            if summary.is_target {
                targets.push(summary.clone());
            }
            by_category.entry(metric.category()).or_default().push(summary);
        }

        Self {
            total_metrics: metrics.len(),
            by_category,
            by_year,
            high_confidence,
            targets,
        }
    }

    /// Number of categories with at least one metric.
    pub fn categories_covered(&self) -> usize {
        self.by_category.len()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// How values of the same metric are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// Sum of values.
    Sum,
    /// Arithmetic mean.
    Average,
    /// Value with the latest year; metrics without a year rank lowest.
    Latest,
}

impl AggregationMode {
    /// Every mode.
    pub fn all() -> &'static [AggregationMode] {
        &[Self::Sum, Self::Average, Self::Latest]
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Average => "average",
            Self::Latest => "latest",
        }
    }
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown aggregation mode: {s}"))
    }
}

/// One aggregated metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedMetric {
    /// Category.
    pub category: MetricCategory,
    /// Display name.
    pub metric_name: String,
    /// Unit shared by the aggregated values.
    pub unit: String,
    /// Aggregated value.
    pub value: f64,
    /// Number of metrics combined.
    pub count: usize,
    /// Latest year among the combined metrics.
    pub year: Option<i32>,
}

/// Combine metrics sharing category, name, and unit.
///
/// Groups appear in order of first occurrence.
pub fn aggregate(metrics: &[StandardizedMetric], mode: AggregationMode) -> Vec<AggregatedMetric> {
    let mut groups: Vec<(MetricCategory, &str, &str, Vec<&StandardizedMetric>)> = Vec::new();
    for metric in metrics {
        let key = (metric.category(), metric.metric_name(), metric.normalized_unit.as_str());
        match groups.iter_mut().find(|(c, n, u, _)| (*c, *n, *u) == key) {
            Some(group) => group.3.push(metric),
            None => groups.push((key.0, key.1, key.2, vec![metric])),
        }
    }

    groups
        .into_iter()
        .map(|(category, name, unit, members)| {
            let year = members.iter().filter_map(|m| m.year()).max();
            let value = match mode {
                AggregationMode::Sum => members.iter().map(|m| m.normalized_value).sum::<f64>(),
                AggregationMode::Average => {
                    members.iter().map(|m| m.normalized_value).sum::<f64>() / members.len() as f64
                }
                AggregationMode::Latest => latest(&members),
            };
            AggregatedMetric {
                category,
                metric_name: name.to_string(),
                unit: unit.to_string(),
                value,
                count: members.len(),
                year,
            }
        })
        .collect()
}

/// Value of the member with the greatest year; the first wins ties.
fn latest(members: &[&StandardizedMetric]) -> f64 {
    let mut best: Option<&StandardizedMetric> = None;
    for member in members {
        match best {
            Some(b) if b.year() >= member.year() => {}
            _ => best = Some(*member),
        }
    }
    best.map_or(0.0, |m| m.normalized_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractedMetric;
    use crate::number::NumberKind;

    fn metric(
        category: MetricCategory,
        name: &str,
        value: f64,
        year: Option<i32>,
        confidence: f64,
    ) -> StandardizedMetric {
        StandardizedMetric {
            extracted: ExtractedMetric {
                metric_name: name.to_string(),
                raw_value: value.to_string(),
                parsed_value: value,
                number_kind: NumberKind::Direct,
                raw_unit: "u".to_string(),
                category,
                scope: None,
                year,
                context: String::new(),
                matched_text: String::new(),
                offset: 0,
                pattern_id: String::new(),
                metric_subtype: None,
                is_reduction: false,
                confidence,
            },
            normalized_value: value,
            normalized_unit: "u".to_string(),
            framework_mappings: BTreeMap::new(),
            is_target: false,
            confidence,
        }
    }

    fn sample() -> Vec<StandardizedMetric> {
        vec![
            metric(MetricCategory::Energy, "Energy", 10.0, Some(2022), 0.9),
            metric(MetricCategory::Water, "Water", 5.0, None, 0.5),
            metric(MetricCategory::Energy, "Energy", 30.0, Some(2023), 0.7),
            metric(MetricCategory::Energy, "Energy", 20.0, Some(2023), 0.85),
        ]
    }

    #[test]
    fn report_groups() {
        let report = MetricsReport::from_metrics(&sample());
        assert_eq!(report.total_metrics, 4);
        assert_eq!(report.categories_covered(), 2);
        assert_eq!(report.by_category[&MetricCategory::Energy].len(), 3);
        assert_eq!(report.by_year[&2023], vec!["Energy".to_string(), "Energy".to_string()]);
        assert!(!report.by_year.contains_key(&0));
        assert_eq!(report.high_confidence.len(), 2);
        assert!(report.targets.is_empty());
    }

    #[test]
    fn empty_report() {
        let report = MetricsReport::from_metrics(&[]);
        assert_eq!(report.total_metrics, 0);
        assert_eq!(report.categories_covered(), 0);
    }

    #[test]
    fn aggregation_modes() {
        let metrics = sample();
        let sum = aggregate(&metrics, AggregationMode::Sum);
        assert_eq!(sum.len(), 2);
        assert_eq!(sum[0].metric_name, "Energy");
        assert_eq!(sum[0].value, 60.0);
        assert_eq!(sum[0].count, 3);
        assert_eq!(sum[0].year, Some(2023));
        assert_eq!(sum[1].value, 5.0);
        assert_eq!(sum[1].year, None);

        assert_eq!(aggregate(&metrics, AggregationMode::Average)[0].value, 20.0);
        // 2023 tie: first occurrence wins.
        assert_eq!(aggregate(&metrics, AggregationMode::Latest)[0].value, 30.0);
    }

    #[test]
    fn latest_prefers_dated_metrics() {
        let metrics = vec![
            metric(MetricCategory::Energy, "Energy", 1.0, None, 0.9),
            metric(MetricCategory::Energy, "Energy", 2.0, Some(2020), 0.9),
        ];
        assert_eq!(aggregate(&metrics, AggregationMode::Latest)[0].value, 2.0);
    }

    #[test]
    fn aggregation_mode_parsing() {
        assert_eq!("SUM".parse::<AggregationMode>(), Ok(AggregationMode::Sum));
        assert_eq!(" latest ".parse::<AggregationMode>(), Ok(AggregationMode::Latest));
        assert!("median".parse::<AggregationMode>().is_err());
        for mode in AggregationMode::all() {
            assert_eq!(mode.to_string().parse::<AggregationMode>(), Ok(*mode));
        }
    }
}
