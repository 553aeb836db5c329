//! # Metric Categories
//!
//! The [`MetricCategory`] enum groups quantitative disclosures. It keys both
//! the extraction pattern sets and the category-to-requirement mapping
//! table, so a category without patterns or mappings is a compile-visible
//! gap rather than a silent one.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EsgdError;

/// A family of quantitative ESG metrics sharing one canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    /// Greenhouse gas emissions (tCO2e).
    Emissions,
    /// Energy consumption and renewable share (MWh).
    Energy,
    /// Water withdrawal, consumption and discharge (m³).
    Water,
    /// Waste generated, diverted or recycled (tonnes).
    Waste,
    /// Land and habitat protection (hectares).
    Biodiversity,
    /// Headcount, hires and turnover.
    Employment,
    /// Workforce and leadership diversity.
    Diversity,
    /// Occupational injuries and fatalities.
    HealthSafety,
    /// Employee training hours.
    Training,
    /// Community investment and volunteering.
    Community,
    /// Board independence and gender balance.
    BoardComposition,
    /// Corruption incidents and ethics violations.
    Ethics,
    /// Identified and assessed risks.
    RiskManagement,
    /// Pay ratios and ESG-linked remuneration.
    Compensation,
    /// Fines, sanctions and regulatory breaches.
    Compliance,
    /// Revenue, investment and other monetary amounts.
    Financial,
}

/// Total number of metric categories.
pub const METRIC_CATEGORY_COUNT: usize = 16;

impl MetricCategory {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [MetricCategory] {
        &[
            Self::Emissions,
            Self::Energy,
            Self::Water,
            Self::Waste,
            Self::Biodiversity,
            Self::Employment,
            Self::Diversity,
            Self::HealthSafety,
            Self::Training,
            Self::Community,
            Self::BoardComposition,
            Self::Ethics,
            Self::RiskManagement,
            Self::Compensation,
            Self::Compliance,
            Self::Financial,
        ]
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emissions => "emissions",
            Self::Energy => "energy",
            Self::Water => "water",
            Self::Waste => "waste",
            Self::Biodiversity => "biodiversity",
            Self::Employment => "employment",
            Self::Diversity => "diversity",
            Self::HealthSafety => "health_safety",
            Self::Training => "training",
            Self::Community => "community",
            Self::BoardComposition => "board_composition",
            Self::Ethics => "ethics",
            Self::RiskManagement => "risk_management",
            Self::Compensation => "compensation",
            Self::Compliance => "compliance",
            Self::Financial => "financial",
        }
    }

    /// Human-readable title used as the base of generated metric names.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Emissions => "Emissions",
            Self::Energy => "Energy",
            Self::Water => "Water",
            Self::Waste => "Waste",
            Self::Biodiversity => "Biodiversity",
            Self::Employment => "Employment",
            Self::Diversity => "Diversity",
            Self::HealthSafety => "Health Safety",
            Self::Training => "Training",
            Self::Community => "Community",
            Self::BoardComposition => "Board Composition",
            Self::Ethics => "Ethics",
            Self::RiskManagement => "Risk Management",
            Self::Compensation => "Compensation",
            Self::Compliance => "Compliance",
            Self::Financial => "Financial",
        }
    }
}

impl std::fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricCategory {
    type Err = EsgdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EsgdError::UnknownCategory(s.to_string()))
    }
}
