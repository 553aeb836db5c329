//! # Unit Standardization
//!
//! Converts an [`ExtractedMetric`] into its category's canonical unit,
//! validates the result, and attaches framework mappings and the target
//! flag.
//!
//! ## Unit resolution
//!
//! 1. percentage spellings become `%`.
//! 2. dimensionless units (`count`, `rate`, `ratio`, ...) pass through.
//! 3. the category's alias table, longest contained alias first.
//! 4. otherwise the canonical unit with multiplier 1.
//!
//! ## Validation
//!
//! A converted value is rejected when it is not finite, negative, a
//! percentage above 100, or an emissions figure above [`MAX_EMISSIONS`].

use std::collections::BTreeMap;
use std::sync::Arc;

use esgd_catalog::{Catalog, PASSTHROUGH_UNITS, PERCENT_ALIASES};
use esgd_core::{clamp_confidence, Framework, MetricCategory};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{MetricRejection, MetricsResult};
use crate::extract::ExtractedMetric;

/// Largest plausible emissions figure in tCO2e.
pub const MAX_EMISSIONS: f64 = 1e9;

const TARGET_LANGUAGE: &str =
    r"\b(?:targets?|goals?|commitments?|committed|plan\s+to|aims?\s+to|will)\b|\bby\s+20\d{2}\b";

/// A metric in canonical units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedMetric {
    /// The extraction this metric came from.
    pub extracted: ExtractedMetric,
    /// Value in `normalized_unit`.
    pub normalized_value: f64,
    /// Canonical unit.
    pub normalized_unit: String,
    /// Requirement ids this metric's category supports, per framework.
    pub framework_mappings: BTreeMap<Framework, Vec<String>>,
    /// Forward-looking target rather than an achieved figure.
    pub is_target: bool,
    /// Final confidence.
    pub confidence: f64,
}

impl StandardizedMetric {
    /// Display name.
    pub fn metric_name(&self) -> &str {
        &self.extracted.metric_name
    }

    /// Category.
    pub fn category(&self) -> MetricCategory {
        self.extracted.category
    }

    /// Reporting year.
    pub fn year(&self) -> Option<i32> {
        self.extracted.year
    }
}

/// Resolved unit of a raw unit string.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitResolution {
    /// Unit the value is expressed in after conversion.
    pub unit: String,
    /// Factor applied to the raw value.
    pub multiplier: f64,
    /// Whether the raw unit was recognized.
    pub recognized: bool,
}

/// Converts extracted metrics into canonical units.
#[derive(Debug, Clone)]
pub struct Standardizer {
    catalog: Arc<Catalog>,
    target_language: Regex,
}

impl Standardizer {
    /// Standardizer over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> MetricsResult<Self> {
        let target_language = RegexBuilder::new(TARGET_LANGUAGE)
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            catalog,
            target_language,
        })
    }

    /// Resolve `raw_unit` within `category`.
    pub fn resolve_unit(&self, category: MetricCategory, raw_unit: &str) -> UnitResolution {
        let lowered = raw_unit.trim().to_lowercase();
        if PERCENT_ALIASES.contains(&lowered.as_str()) {
            return UnitResolution {
                unit: "%".to_string(),
                multiplier: 1.0,
                recognized: true,
            };
        }
        if let Some(unit) = PASSTHROUGH_UNITS.iter().find(|u| **u == lowered) {
            return UnitResolution {
                unit: (*unit).to_string(),
                multiplier: 1.0,
                recognized: true,
            };
        }
        let table = self.catalog.units(category);
        match table.find_alias(&lowered) {
            Some(alias) => UnitResolution {
                unit: table.canonical.to_string(),
                multiplier: alias.multiplier,
                recognized: true,
            },
            None => UnitResolution {
                unit: table.canonical.to_string(),
                multiplier: 1.0,
                recognized: false,
            },
        }
    }

    /// Whether `metric` describes a forward-looking target.
    pub fn is_target(&self, metric: &ExtractedMetric) -> bool {
        self.target_language.is_match(&metric.metric_name)
            || self.target_language.is_match(&metric.context)
    }

    /// Convert and validate one metric.
    pub fn standardize(&self, metric: ExtractedMetric) -> Result<StandardizedMetric, MetricRejection> {
        let resolution = self.resolve_unit(metric.category, &metric.raw_unit);
        if !resolution.recognized && !metric.raw_unit.is_empty() {
            tracing::debug!(
                category = %metric.category,
                raw_unit = %metric.raw_unit,
                canonical = %resolution.unit,
                "unrecognized unit, assuming canonical"
            );
        }

        let value = metric.parsed_value * resolution.multiplier;
        validate(metric.category, &resolution.unit, value)?;

        Ok(StandardizedMetric {
            normalized_value: value,
            normalized_unit: resolution.unit,
            framework_mappings: self.catalog.mappings_for(metric.category),
            is_target: self.is_target(&metric),
            confidence: clamp_confidence(metric.confidence),
            extracted: metric,
        })
    }

    /// Standardize every metric, dropping rejections.
    pub fn standardize_all(&self, metrics: Vec<ExtractedMetric>) -> Vec<StandardizedMetric> {
        metrics
            .into_iter()
            .filter_map(|metric| {
                let name = metric.metric_name.clone();
                match self.standardize(metric) {
                    Ok(standardized) => Some(standardized),
                    Err(rejection) => {
                        tracing::debug!(metric = %name, reason = %rejection, "rejected metric");
                        None
                    }
                }
            })
            .collect()
    }
}

fn validate(category: MetricCategory, unit: &str, value: f64) -> Result<(), MetricRejection> {
    if !value.is_finite() {
        return Err(MetricRejection::NonFinite);
    }
    if value < 0.0 {
        return Err(MetricRejection::Negative { value });
    }
    if unit == "%" && value > 100.0 {
        return Err(MetricRejection::PercentageOverflow { value });
    }
    if category == MetricCategory::Emissions && value > MAX_EMISSIONS {
        return Err(MetricRejection::Implausible {
            category,
            value,
            limit: MAX_EMISSIONS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::NumberKind;

    fn standardizer() -> Standardizer {
        Standardizer::new(Arc::new(Catalog::load().unwrap())).unwrap()
    }

    fn metric(category: MetricCategory, value: f64, unit: &str) -> ExtractedMetric {
        ExtractedMetric {
            metric_name: category.title().to_string(),
            raw_value: value.to_string(),
            parsed_value: value,
            number_kind: NumberKind::Direct,
            raw_unit: unit.to_string(),
            category,
            scope: None,
            year: Some(2023),
            context: String::new(),
            matched_text: String::new(),
            offset: 0,
            pattern_id: format!("{category}.0"),
            metric_subtype: None,
            is_reduction: false,
            confidence: 0.95,
        }
    }

    fn converted(category: MetricCategory, value: f64, unit: &str) -> (f64, String) {
        let s = standardizer().standardize(metric(category, value, unit)).unwrap();
        (s.normalized_value, s.normalized_unit)
    }

    #[test]
    fn canonical_conversions() {
        assert_eq!(converted(MetricCategory::Emissions, 45_000.0, "tCO2e"), (45_000.0, "tCO2e".into()));
        assert_eq!(converted(MetricCategory::Energy, 450.0, "GWh"), (450_000.0, "MWh".into()));
        assert_eq!(
            converted(MetricCategory::Water, 2.5, "million cubic meters"),
            (2_500.0, "m³".into())
        );
        assert_eq!(converted(MetricCategory::Waste, 50.0, "kg"), (0.05, "tonnes".into()));
        assert_eq!(converted(MetricCategory::Employment, 300.0, "employees"), (300.0, "employees".into()));
    }

    #[test]
    fn percent_spellings() {
        for unit in ["%", "percent", "Percentage"] {
            assert_eq!(converted(MetricCategory::Energy, 35.0, unit), (35.0, "%".into()));
        }
    }

    #[test]
    fn passthrough_units() {
        assert_eq!(converted(MetricCategory::HealthSafety, 0.42, "rate"), (0.42, "rate".into()));
        assert_eq!(converted(MetricCategory::Biodiversity, 12.0, "species"), (12.0, "species".into()));
        assert_eq!(
            converted(MetricCategory::Training, 24.0, "hours/employee"),
            (24.0, "hours/employee".into())
        );
    }

    #[test]
    fn unknown_unit_assumes_canonical() {
        let resolution = standardizer().resolve_unit(MetricCategory::Energy, "furlongs");
        assert_eq!(resolution.unit, "MWh");
        assert_eq!(resolution.multiplier, 1.0);
        assert!(!resolution.recognized);
        assert_eq!(converted(MetricCategory::Community, 5000.0, ""), (5000.0, "USD".into()));
    }

    #[test]
    fn monetary_scale() {
        assert_eq!(converted(MetricCategory::Financial, 2.5, "billion"), (2.5e9, "USD".into()));
    }

    #[test]
    fn rejections() {
        let s = standardizer();
        assert_eq!(
            s.standardize(metric(MetricCategory::Energy, 120.0, "%")).unwrap_err(),
            MetricRejection::PercentageOverflow { value: 120.0 }
        );
        assert_eq!(
            s.standardize(metric(MetricCategory::Water, -4.0, "m3")).unwrap_err(),
            MetricRejection::Negative { value: -4.0 }
        );
        assert_eq!(
            s.standardize(metric(MetricCategory::Energy, f64::NAN, "MWh")).unwrap_err(),
            MetricRejection::NonFinite
        );
        assert!(matches!(
            s.standardize(metric(MetricCategory::Emissions, 2.0, "million tonnes")),
            Ok(ref m) if m.normalized_value == 2e6
        ));
        assert!(matches!(
            s.standardize(metric(MetricCategory::Emissions, 2_000.0, "million tonnes")).unwrap_err(),
            MetricRejection::Implausible { .. }
        ));
    }

    #[test]
    fn hundred_percent_is_valid() {
        assert_eq!(converted(MetricCategory::Diversity, 100.0, "%"), (100.0, "%".into()));
    }

    #[test]
    fn serializes_mappings_by_framework_name() {
        let standardized = standardizer()
            .standardize(metric(MetricCategory::Emissions, 45_000.0, "tCO2e"))
            .unwrap();
        let json = serde_json::to_value(&standardized).unwrap();
        assert_eq!(json["normalized_unit"], "tCO2e");
        assert_eq!(json["framework_mappings"]["GRI"][0], "GRI-305-1");
        assert_eq!(json["extracted"]["category"], "emissions");
    }

    #[test]
    fn standardize_all_drops_rejections() {
        let kept = standardizer().standardize_all(vec![
            metric(MetricCategory::Energy, 35.0, "%"),
            metric(MetricCategory::Energy, 135.0, "%"),
            metric(MetricCategory::Energy, 10.0, "MWh"),
        ]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].normalized_value, 10.0);
    }

    #[test]
    fn framework_mappings_follow_category() {
        let s = standardizer().standardize(metric(MetricCategory::Water, 1.0, "m3")).unwrap();
        assert_eq!(s.framework_mappings[&Framework::Csrd], vec!["CSRD-E3-1".to_string()]);
        assert_eq!(s.framework_mappings[&Framework::Gri], vec!["GRI-303-3".to_string()]);
        assert!(!s.framework_mappings.contains_key(&Framework::Sasb));
    }

    #[test]
    fn target_language() {
        let s = standardizer();
        let mut m = metric(MetricCategory::Emissions, 50.0, "%");
        m.context = "We will cut emissions 50% by 2030.".into();
        assert!(s.standardize(m.clone()).unwrap().is_target);
        m.context = "Our target is a 50% reduction.".into();
        assert!(s.is_target(&m));
        m.context = "Emissions fell 50% in 2023 against the baseline.".into();
        assert!(!s.is_target(&m));
        m.context = "Staff were willing to report.".into();
        assert!(!s.is_target(&m));
    }

    #[test]
    fn confidence_is_clamped() {
        let mut m = metric(MetricCategory::Energy, 1.0, "MWh");
        m.confidence = 1.0;
        assert_eq!(standardizer().standardize(m).unwrap().confidence, 0.95);
    }
}
