//! # Pattern Specifications
//!
//! A [`PatternSpec`] is pure data: a regex source, the capture group holding
//! the numeric literal, where the unit comes from, and the flags that shape
//! the generated metric. Static tables declare patterns as [`PatternDef`]
//! values using a `<num>` placeholder that expands to [`NUMBER`], so every
//! pattern shares one definition of what a numeric literal looks like.
//! Patterns that name the metric before its value put `<approx>` ahead of
//! `<num>` so hedged values ("emissions were approximately 1,000 tCO2e")
//! still match.
//!
//! [`CompiledPattern`] pairs a spec with its compiled regex. Compilation
//! checks that the referenced capture groups exist.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Numeric literal: optional `~`, thousands separators, decimals, and an
/// optional hyphenated range (`100-150`). Always a single capture group.
pub const NUMBER: &str = r"(~?\d[\d,]*(?:\.\d+)?(?:\s?[-–]\s?\d[\d,]*(?:\.\d+)?)?)";

/// Placeholder expanded to [`NUMBER`] in pattern definitions.
pub const NUM_TOKEN: &str = "<num>";

/// Optional hedging word before a value. Non-capturing, so group numbering
/// is unaffected.
pub const APPROX: &str = r"(?:(?:approximately|approx\.?|about|around|roughly|nearly)\s+)?";

/// Placeholder expanded to [`APPROX`] in pattern definitions.
pub const APPROX_TOKEN: &str = "<approx>";

/// Locates a GHG Protocol scope mention; group 1 is the digit.
pub const SCOPE_PATTERN: &str = r"scope\s*([123])";

/// A metric extraction pattern as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Stable identifier (`emissions.0`, `CSRD-E1-1#1`).
    pub id: String,
    /// Regex source, matched case-insensitively.
    pub regex: String,
    /// Capture group holding the numeric literal.
    pub value_group: usize,
    /// Capture group holding the unit, if the regex captures one.
    pub unit_group: Option<usize>,
    /// Unit used when there is no unit group or it did not participate.
    pub default_unit: Option<String>,
    /// The pattern reports a reduction rather than an absolute amount.
    #[serde(default)]
    pub is_reduction: bool,
    /// Regex searched around the match to attribute an emissions scope.
    pub scope_pattern: Option<String>,
    /// Refines the generated metric name (`renewable_percentage`).
    pub metric_subtype: Option<String>,
}

/// Compile-time pattern declaration used by the static tables.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    /// Regex source with `<num>` and `<approx>` placeholders.
    pub regex: &'static str,
    /// Capture group of the numeric literal.
    pub value_group: usize,
    /// Capture group of the unit.
    pub unit_group: Option<usize>,
    /// Fallback unit.
    pub default_unit: Option<&'static str>,
    /// Reduction flag.
    pub is_reduction: bool,
    /// Attach [`SCOPE_PATTERN`].
    pub scoped: bool,
    /// Metric subtype.
    pub subtype: Option<&'static str>,
}

impl PatternDef {
    /// A pattern whose value is capture group 1 and which carries no unit.
    pub const fn new(regex: &'static str) -> Self {
        Self {
            regex,
            value_group: 1,
            unit_group: None,
            default_unit: None,
            is_reduction: false,
            scoped: false,
            subtype: None,
        }
    }

    /// Take the unit from capture group `group`.
    pub const fn unit(self, group: usize) -> Self {
        Self {
            unit_group: Some(group),
            ..self
        }
    }

    /// Use a fixed unit when no unit group participates.
    pub const fn default_unit(self, unit: &'static str) -> Self {
        Self {
            default_unit: Some(unit),
            ..self
        }
    }

    /// Mark as a reduction pattern.
    pub const fn reduction(self) -> Self {
        Self {
            is_reduction: true,
            ..self
        }
    }

    /// Attribute emissions scope from surrounding text.
    pub const fn scoped(self) -> Self {
        Self {
            scoped: true,
            ..self
        }
    }

    /// Set the metric subtype.
    pub const fn subtype(self, subtype: &'static str) -> Self {
        Self {
            subtype: Some(subtype),
            ..self
        }
    }

    /// Expand placeholders into an owned [`PatternSpec`].
    pub fn to_spec(&self, id: String) -> PatternSpec {
        PatternSpec {
            id,
            regex: self.regex.replace(APPROX_TOKEN, APPROX).replace(NUM_TOKEN, NUMBER),
            value_group: self.value_group,
            unit_group: self.unit_group,
            default_unit: self.default_unit.map(str::to_string),
            is_reduction: self.is_reduction,
            scope_pattern: self.scoped.then(|| SCOPE_PATTERN.to_string()),
            metric_subtype: self.subtype.map(str::to_string),
        }
    }
}

/// A [`PatternSpec`] with its compiled regexes.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The declaration this pattern was compiled from.
    pub spec: PatternSpec,
    /// Case-insensitive main regex.
    pub regex: Regex,
    /// Case-insensitive scope regex, when the spec declares one.
    pub scope: Option<Regex>,
}

impl CompiledPattern {
    /// Compile a spec, verifying its capture group references.
    pub fn compile(spec: PatternSpec) -> CatalogResult<Self> {
        let regex = build(&spec.id, &spec.regex)?;
        let available = regex.captures_len().saturating_sub(1);
        for group in std::iter::once(spec.value_group).chain(spec.unit_group) {
            if group == 0 || group > available {
                return Err(CatalogError::PatternGroup {
                    pattern_id: spec.id.clone(),
                    group,
                    available,
                });
            }
        }
        let scope = match &spec.scope_pattern {
            Some(src) => Some(build(&spec.id, src)?),
            None => None,
        };
        Ok(Self { spec, regex, scope })
    }
}

fn build(pattern_id: &str, source: &str) -> CatalogResult<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|source| CatalogError::PatternCompile {
            pattern_id: pattern_id.to_string(),
            source,
        })
}
