//! # Numeric Literal Parsing
//!
//! Turns a matched literal into a value and a parse confidence. Rules are
//! applied in order; the first that yields a number wins:
//!
//! | Literal | Value | Confidence |
//! |---------|-------|------------|
//! | range `100-150` | mean of the bounds | 0.8 |
//! | `~300`, or approximate wording nearby | the literal | 0.9 |
//! | plain literal | the literal | 1.0 |
//! | anything else with an embedded number | first number | 0.7 |
//!
//! Thousands separators and whitespace are stripped first.

use serde::{Deserialize, Serialize};

/// How the value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    /// A plain literal.
    Direct,
    /// A `~` prefix or approximate wording.
    Approximate,
    /// Mean of a hyphenated range.
    Range,
    /// First number embedded in otherwise unparseable text.
    Fallback,
}

impl NumberKind {
    /// Parse confidence for this kind.
    pub fn confidence(&self) -> f64 {
        match self {
            Self::Direct => 1.0,
            Self::Approximate => 0.9,
            Self::Range => 0.8,
            Self::Fallback => 0.7,
        }
    }
}

/// A parsed literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedNumber {
    /// Numeric value.
    pub value: f64,
    /// Which rule produced it.
    pub kind: NumberKind,
}

impl ParsedNumber {
    /// Parse confidence.
    pub fn confidence(&self) -> f64 {
        self.kind.confidence()
    }
}

/// Parse `literal`. `approximate` reports approximate wording around it.
pub fn parse_number(literal: &str, approximate: bool) -> Option<ParsedNumber> {
    let cleaned: String = literal
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    if !cleaned.starts_with('-') {
        if let Some((lo, hi)) = cleaned.split_once(|c| c == '-' || c == '–') {
            if let (Ok(lo), Ok(hi)) = (lo.trim_start_matches('~').parse::<f64>(), hi.parse::<f64>()) {
                return Some(ParsedNumber {
                    value: (lo + hi) / 2.0,
                    kind: NumberKind::Range,
                });
            }
        }
    }

    if cleaned.starts_with('~') || approximate {
        if let Ok(value) = cleaned.trim_start_matches('~').parse::<f64>() {
            return Some(ParsedNumber {
                value,
                kind: NumberKind::Approximate,
            });
        }
    }

    if let Ok(value) = cleaned.parse::<f64>() {
        return Some(ParsedNumber {
            value,
            kind: NumberKind::Direct,
        });
    }

    first_number(&cleaned).map(|value| ParsedNumber {
        value,
        kind: NumberKind::Fallback,
    })
}

/// First `-?\d+(\.\d*)?` in `s`.
fn first_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    let begin = if start > 0 && bytes[start - 1] == b'-' {
        start - 1
    } else {
        start
    };
    s[begin..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> (f64, NumberKind) {
        let p = parse_number(s, false).unwrap_or_else(|| panic!("{s} did not parse"));
        (p.value, p.kind)
    }

    #[test]
    fn direct_literals() {
        assert_eq!(parse("45,000"), (45_000.0, NumberKind::Direct));
        assert_eq!(parse("2.5"), (2.5, NumberKind::Direct));
        assert_eq!(parse("1,234.5"), (1234.5, NumberKind::Direct));
    }

    #[test]
    fn ranges_take_the_mean() {
        assert_eq!(parse("100-150"), (125.0, NumberKind::Range));
        assert_eq!(parse("10 - 20"), (15.0, NumberKind::Range));
        assert_eq!(parse("1,000–2,000"), (1500.0, NumberKind::Range));
        assert_eq!(parse("~10-20"), (15.0, NumberKind::Range));
    }

    #[test]
    fn approximations() {
        assert_eq!(parse("~300"), (300.0, NumberKind::Approximate));
        let p = parse_number("300", true).unwrap();
        assert_eq!((p.value, p.kind), (300.0, NumberKind::Approximate));
    }

    #[test]
    fn fallback_extracts_first_number() {
        assert_eq!(parse("12.5x"), (12.5, NumberKind::Fallback));
        assert_eq!(parse("approx-7"), (-7.0, NumberKind::Fallback));
    }

    #[test]
    fn nothing_to_parse() {
        assert!(parse_number("", false).is_none());
        assert!(parse_number(" , ", false).is_none());
        assert!(parse_number("n/a", false).is_none());
    }

    #[test]
    fn confidences_ordered() {
        assert!(NumberKind::Direct.confidence() > NumberKind::Approximate.confidence());
        assert!(NumberKind::Approximate.confidence() > NumberKind::Range.confidence());
        assert!(NumberKind::Range.confidence() > NumberKind::Fallback.confidence());
    }
}
