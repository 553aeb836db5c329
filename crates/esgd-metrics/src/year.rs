//! # Reporting Year Detection
//!
//! Finds the reporting year of a document from common temporal phrasings.
//! Phrasings are tried in priority order; within one phrasing, matches are
//! tried left to right. Only years from 2000 through the year after the
//! reference year are accepted.

use regex::{Regex, RegexBuilder};

use crate::error::MetricsResult;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sept?(?:ember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// Earliest accepted reporting year.
pub const MIN_YEAR: i32 = 2000;

/// Reporting year extractor bound to a reference year.
#[derive(Debug, Clone)]
pub struct YearExtractor {
    patterns: Vec<Regex>,
    max_year: i32,
}

impl YearExtractor {
    /// Build an extractor accepting years up to `reference_year + 1`.
    pub fn new(reference_year: i32) -> MetricsResult<Self> {
        let sources = [
            r"\b(?:fiscal\s+year|fiscal|fy|year|reporting\s+period)\s*[:\-]?\s*'?(\d{4})\b".to_string(),
            format!(r"\b(?:as\s+of|ended|ending)\s+(?:{MONTH}\.?\s+)?(?:\d{{1,2}},?\s+)?(\d{{4}})\b"),
            r"\b(\d{4})\s+(?:annual|sustainability|esg|integrated|impact|csr)\s+report".to_string(),
            r"\b(?:in|for|during)\s+(\d{4})\b".to_string(),
        ];
        let patterns = sources
            .iter()
            .map(|source| RegexBuilder::new(source).case_insensitive(true).build())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns,
            max_year: reference_year.saturating_add(1),
        })
    }

    /// Latest accepted year.
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Whether `year` falls in the accepted range.
    pub fn accepts(&self, year: i32) -> bool {
        (MIN_YEAR..=self.max_year).contains(&year)
    }

    /// First accepted year found in `text`.
    pub fn extract(&self, text: &str) -> Option<i32> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .captures_iter(text)
                .filter_map(|caps| caps.get(1)?.as_str().parse::<i32>().ok())
                .find(|year| self.accepts(*year))
        })
    }
}
