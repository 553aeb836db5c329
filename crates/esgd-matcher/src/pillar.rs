//! # ESG Pillar Scores
//!
//! A coarse keyword score per pillar. High-, medium- and low-weight keyword
//! lists contribute 3, 2 and 1 points; a pillar scores the fraction of its
//! available points present in the text, as a percentage.

use serde::{Deserialize, Serialize};

struct Pillar {
    high: &'static [&'static str],
    medium: &'static [&'static str],
    low: &'static [&'static str],
}

const ENVIRONMENTAL: Pillar = Pillar {
    high: &[
        "carbon neutral",
        "net zero",
        "renewable energy",
        "science-based targets",
    ],
    medium: &["emissions", "climate", "sustainability", "recycling"],
    low: &["environment", "green", "eco", "conservation"],
};

const SOCIAL: Pillar = Pillar {
    high: &[
        "human rights",
        "diversity equity inclusion",
        "employee wellbeing",
    ],
    medium: &["diversity", "safety", "community", "training"],
    low: &["social", "employee", "workplace", "engagement"],
};

const GOVERNANCE: Pillar = Pillar {
    high: &[
        "board independence",
        "executive compensation",
        "audit committee",
    ],
    medium: &["governance", "ethics", "compliance", "transparency"],
    low: &["board", "management", "oversight", "control"],
};

impl Pillar {
    fn score(&self, lowered: &str) -> f64 {
        let mut earned = 0u32;
        let mut available = 0u32;
        for (keywords, weight) in [(self.high, 3), (self.medium, 2), (self.low, 1)] {
            for kw in keywords {
                available += weight;
                if lowered.contains(kw) {
                    earned += weight;
                }
            }
        }
        if available == 0 {
            return 0.0;
        }
        (f64::from(earned) / f64::from(available) * 100.0).min(100.0)
    }
}

/// Keyword scores per ESG pillar, each in `[0, 100]` with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarScores {
    /// Environmental pillar.
    pub environmental: f64,
    /// Social pillar.
    pub social: f64,
    /// Governance pillar.
    pub governance: f64,
    /// Mean of the three pillars.
    pub overall: f64,
}

impl PillarScores {
    /// Score `text`.
    pub fn score(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let environmental = ENVIRONMENTAL.score(&lowered);
        let social = SOCIAL.score(&lowered);
        let governance = GOVERNANCE.score(&lowered);
        let overall = (environmental + social + governance) / 3.0;
        Self {
            environmental: round1(environmental),
            social: round1(social),
            governance: round1(governance),
            overall: round1(overall),
        }
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero() {
        let s = PillarScores::score("");
        assert_eq!(s.environmental, 0.0);
        assert_eq!(s.social, 0.0);
        assert_eq!(s.governance, 0.0);
        assert_eq!(s.overall, 0.0);
    }

    #[test]
    fn weights_apply() {
        // Environmental: 4*3 + 4*2 + 4*1 = 24 available; "net zero" earns 3.
        let s = PillarScores::score("Net Zero");
        assert_eq!(s.environmental, 12.5);
        assert_eq!(s.overall, 4.2);
    }

    #[test]
    fn every_keyword_scores_one_hundred() {
        let text = [
            ENVIRONMENTAL.high,
            ENVIRONMENTAL.medium,
            ENVIRONMENTAL.low,
        ]
        .concat()
        .join(" ");
        assert_eq!(PillarScores::score(&text).environmental, 100.0);
    }

    #[test]
    fn governance_substring_semantics() {
        // "board" inside "board independence" counts for both.
        let s = PillarScores::score("board independence");
        // 3 + 1 of 3*3 + 4*2 + 4*1 = 21
        assert_eq!(s.governance, 19.0);
    }
}
