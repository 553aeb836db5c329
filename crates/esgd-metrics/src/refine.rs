//! # Deduplication and Confidence Refinement
//!
//! Metrics sharing `(name, value, unit, year, scope)` collapse to the one
//! with the highest confidence; ties keep the earliest. Surviving metrics
//! keep the position of their key's first occurrence.
//!
//! Each metric's final confidence is its extraction confidence scaled by a
//! context score:
//!
//! | Signal | Adjustment |
//! |--------|------------|
//! | base | 0.7 |
//! | matched span under 5 tokens | +0.1 |
//! | a 4-digit year in the context | +0.1 |
//! | framework or disclosure wording in the context | +0.05 |
//! | forward-looking wording in the context | -0.2 |
//!
//! The score is always derived from the extraction confidence, never from
//! a previous refinement, so refining twice gives the same result.

use std::collections::HashMap;

use esgd_core::{clamp_confidence, EmissionsScope};
use regex::Regex;

use crate::error::MetricsResult;
use crate::standardize::StandardizedMetric;

const BASE_SCORE: f64 = 0.7;
const COMPACT_TOKENS: usize = 5;
const DISCLOSURE_WORDS: &[&str] = &["gri", "sasb", "tcfd", "csrd", "reported", "disclosed"];
const FORWARD_WORDS: &[&str] = &["target", "goal", "aim", "plan", "expect", "forecast"];

type DedupKey = (String, u64, String, Option<i32>, Option<EmissionsScope>);

/// Applies deduplication and context scoring.
#[derive(Debug, Clone)]
pub struct ConfidenceRefiner {
    year: Regex,
}

impl ConfidenceRefiner {
    /// Build a refiner.
    pub fn new() -> MetricsResult<Self> {
        Ok(Self {
            year: Regex::new(r"\b20\d{2}\b")?,
        })
    }

    /// Context score of one metric, clamped to the confidence range.
    pub fn context_score(&self, metric: &StandardizedMetric) -> f64 {
        let extracted = &metric.extracted;
        let context = extracted.context.to_lowercase();
        let mut score = BASE_SCORE;
        if extracted.matched_text.split_whitespace().count() < COMPACT_TOKENS {
            score += 0.1;
        }
        if self.year.is_match(&context) {
            score += 0.1;
        }
        if DISCLOSURE_WORDS.iter().any(|w| context.contains(w)) {
            score += 0.05;
        }
        if FORWARD_WORDS.iter().any(|w| context.contains(w)) {
            score -= 0.2;
        }
        clamp_confidence(score)
    }

    /// Deduplicate `metrics` and assign final confidences.
    ///
    /// The document is read through each metric's stored context (the
    /// characters kept around the match at extraction), so no document text
    /// is passed in.
    pub fn refine(&self, metrics: Vec<StandardizedMetric>) -> Vec<StandardizedMetric> {
        let total = metrics.len();
        let mut slots: Vec<StandardizedMetric> = Vec::with_capacity(total);
        let mut index: HashMap<DedupKey, usize> = HashMap::new();

        for mut metric in metrics {
            metric.confidence =
                clamp_confidence(metric.extracted.confidence * self.context_score(&metric));
            match index.get(&dedup_key(&metric)) {
                Some(&slot) => {
                    if metric.confidence > slots[slot].confidence {
                        slots[slot] = metric;
                    }
                }
                None => {
                    index.insert(dedup_key(&metric), slots.len());
                    slots.push(metric);
                }
            }
        }

        if slots.len() < total {
            tracing::debug!(before = total, after = slots.len(), "deduplicated metrics");
        }
        slots
    }
}

fn dedup_key(metric: &StandardizedMetric) -> DedupKey {
    // -0.0 and 0.0 are the same value.
    let value = if metric.normalized_value == 0.0 {
        0.0_f64
    } else {
        metric.normalized_value
    };
    (
        metric.extracted.metric_name.clone(),
        value.to_bits(),
        metric.normalized_unit.clone(),
        metric.extracted.year,
        metric.extracted.scope,
    )
}
