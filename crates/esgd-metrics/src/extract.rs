//! # Metric Extraction
//!
//! Runs every category extraction pattern of the catalog over a document
//! and turns each match into an [`ExtractedMetric`].
//!
//! ## Per match
//!
//! - the value literal is parsed by [`parse_number`]; literals with no
//!   number are discarded.
//! - the unit is the pattern's unit group when it participated, else the
//!   pattern's default unit, else empty.
//! - context is the match widened by up to 100 characters on each side.
//! - for scope-aware emissions patterns, the scope is the nearest scope
//!   mention in the context at or before the value, else the first one
//!   after it.
//!
//! Output order follows catalog pattern order, then match position, so
//! repeated runs over the same text return identical lists.

use std::sync::Arc;

use esgd_catalog::{Catalog, CompiledPattern};
use esgd_core::{clamp_confidence, EmissionsScope, MetricCategory};
use serde::{Deserialize, Serialize};

use crate::error::{MetricRejection, MetricsResult};
use crate::number::{parse_number, NumberKind};
use crate::year::YearExtractor;

/// Characters of context kept on each side of a match.
pub const CONTEXT_CHARS: usize = 100;

/// A metric candidate found in text, before unit normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMetric {
    /// Display name, e.g. `Emissions - Scope 1`.
    pub metric_name: String,
    /// Value literal as it appeared.
    pub raw_value: String,
    /// Parsed numeric value.
    pub parsed_value: f64,
    /// How the literal was parsed.
    pub number_kind: NumberKind,
    /// Unit as it appeared, or the pattern default.
    pub raw_unit: String,
    /// Category of the pattern that matched.
    pub category: MetricCategory,
    /// Emissions scope, when determinable.
    pub scope: Option<EmissionsScope>,
    /// Reporting year.
    pub year: Option<i32>,
    /// Surrounding text.
    pub context: String,
    /// The full matched span.
    pub matched_text: String,
    /// Byte offset of the match in the document.
    pub offset: usize,
    /// Id of the pattern that matched.
    pub pattern_id: String,
    /// Subtype declared by the pattern.
    pub metric_subtype: Option<String>,
    /// The pattern describes a reduction rather than an absolute amount.
    pub is_reduction: bool,
    /// Extraction confidence.
    pub confidence: f64,
}

/// Display name for a metric: the category title, refined by subtype,
/// then scope, then reduction.
pub fn metric_name(
    category: MetricCategory,
    subtype: Option<&str>,
    scope: Option<EmissionsScope>,
    is_reduction: bool,
) -> String {
    let title = category.title();
    match (subtype, scope) {
        (Some(subtype), _) => format!("{title} - {}", title_case(subtype)),
        (None, Some(scope)) => format!("{title} - Scope {scope}"),
        (None, None) if is_reduction => format!("{title} - Reduction"),
        (None, None) => title.to_string(),
    }
}

fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Extracts metric candidates from text using the catalog's patterns.
#[derive(Debug, Clone)]
pub struct MetricExtractor {
    catalog: Arc<Catalog>,
    years: YearExtractor,
}

impl MetricExtractor {
    /// Extractor over `catalog`, accepting reporting years up to
    /// `reference_year + 1`.
    pub fn new(catalog: Arc<Catalog>, reference_year: i32) -> MetricsResult<Self> {
        Ok(Self {
            catalog,
            years: YearExtractor::new(reference_year)?,
        })
    }

    /// The year extractor in use.
    pub fn years(&self) -> &YearExtractor {
        &self.years
    }

    /// Extract every metric candidate in `text`.
    ///
    /// `year` is attached to every metric when given; otherwise the
    /// document's reporting year is detected once and attached.
    pub fn extract(&self, text: &str, year: Option<i32>) -> Vec<ExtractedMetric> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let year = year.or_else(|| self.years.extract(text));

        let mut metrics = Vec::new();
        for (category, pattern) in self.catalog.extraction_patterns() {
            for caps in pattern.regex.captures_iter(text) {
                let (Some(whole), Some(value)) = (caps.get(0), caps.get(pattern.spec.value_group))
                else {
                    continue;
                };
                let raw_value = value.as_str().trim();
                let (start, end) = (whole.start(), whole.end());
                let approximate = sentence(text, start, end).to_lowercase().contains("approx");
                let Some(parsed) = parse_number(raw_value, approximate) else {
                    let rejection = MetricRejection::Unparseable {
                        raw: raw_value.to_string(),
                    };
                    tracing::debug!(pattern = %pattern.spec.id, reason = %rejection, "discarding candidate");
                    continue;
                };

                let raw_unit = pattern
                    .spec
                    .unit_group
                    .and_then(|g| caps.get(g))
                    .map(|m| m.as_str().trim().to_string())
                    .or_else(|| pattern.spec.default_unit.clone())
                    .unwrap_or_default();

                let (ctx_start, ctx_end) = context_bounds(text, start, end);
                let scope = if *category == MetricCategory::Emissions {
                    detect_scope(pattern, text, (ctx_start, ctx_end), (start, end), value.start())
                } else {
                    None
                };

                metrics.push(ExtractedMetric {
                    metric_name: metric_name(
                        *category,
                        pattern.spec.metric_subtype.as_deref(),
                        scope,
                        pattern.spec.is_reduction,
                    ),
                    raw_value: raw_value.to_string(),
                    parsed_value: parsed.value,
                    number_kind: parsed.kind,
                    raw_unit,
                    category: *category,
                    scope,
                    year,
                    context: text[ctx_start..ctx_end].trim().to_string(),
                    matched_text: whole.as_str().to_string(),
                    offset: start,
                    pattern_id: pattern.spec.id.clone(),
                    metric_subtype: pattern.spec.metric_subtype.clone(),
                    is_reduction: pattern.spec.is_reduction,
                    confidence: clamp_confidence(parsed.confidence()),
                });
            }
        }
        tracing::debug!(count = metrics.len(), year = ?year, "extracted metric candidates");
        metrics
    }
}

/// Byte range of the match widened by [`CONTEXT_CHARS`] on each side,
/// on char boundaries.
fn context_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let ctx_start = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map_or(0, |(i, _)| i);
    let ctx_end = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map_or(text.len(), |(i, _)| end + i);
    (ctx_start, ctx_end)
}

/// The sentence containing `[start, end)`. A terminator is `!`, `?`, a
/// newline, or a period followed by whitespace or end of text.
fn sentence(text: &str, start: usize, end: usize) -> &str {
    let (from, to) = sentence_bounds(text, start, end);
    &text[from..to]
}

fn sentence_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let is_break = |i: usize, c: char| match c {
        '!' | '?' | '\n' => true,
        '.' => text[i + 1..].chars().next().map_or(true, char::is_whitespace),
        _ => false,
    };
    let from = text[..start]
        .char_indices()
        .rev()
        .find(|(i, c)| is_break(*i, *c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let to = text[end..]
        .char_indices()
        .find(|(i, c)| is_break(end + i, *c))
        .map_or(text.len(), |(i, _)| end + i);
    (from, to)
}

/// Scope mentioned in the part of the context window that shares the
/// match's sentence. A mention in a neighbouring sentence never labels the
/// value. Within the sentence the nearest mention at or before the value
/// wins, else the first one after it.
fn detect_scope(
    pattern: &CompiledPattern,
    text: &str,
    (ctx_start, ctx_end): (usize, usize),
    (match_start, match_end): (usize, usize),
    value_start: usize,
) -> Option<EmissionsScope> {
    let scope_regex = pattern.scope.as_ref()?;
    let (sentence_start, sentence_end) = sentence_bounds(text, match_start, match_end);
    let from = ctx_start.max(sentence_start);
    let to = ctx_end.min(sentence_end);
    let mut before = None;
    let mut after = None;
    for caps in scope_regex.captures_iter(&text[from..to]) {
        let (Some(whole), Some(digit)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(scope) = digit.as_str().chars().next().and_then(EmissionsScope::from_digit) else {
            continue;
        };
        if from + whole.start() <= value_start {
            before = Some(scope);
        } else if after.is_none() {
            after = Some(scope);
        }
    }
    before.or(after)
}
