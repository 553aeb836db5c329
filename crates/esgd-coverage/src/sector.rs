//! # Industry Sectors
//!
//! Sectors that change gap severity. Any other sector name is kept as
//! [`IndustrySector::Other`] and applies no sector rule.

use esgd_core::Severity;

/// Industry sector of the reporting company.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndustrySector {
    /// Energy.
    Energy,
    /// Utilities.
    Utilities,
    /// Oil and gas.
    OilAndGas,
    /// Technology.
    Technology,
    /// Finance.
    Finance,
    /// Manufacturing.
    Manufacturing,
    /// Automotive.
    Automotive,
    /// Any other sector, lowercased.
    Other(String),
}

impl IndustrySector {
    /// Parse a sector name, case-insensitively.
    pub fn parse(name: &str) -> Self {
        let lowered = name.trim().to_lowercase();
        match lowered.as_str() {
            "energy" => Self::Energy,
            "utilities" => Self::Utilities,
            "oil & gas" | "oil and gas" | "oil_and_gas" | "oil-and-gas" => Self::OilAndGas,
            "technology" => Self::Technology,
            "finance" => Self::Finance,
            "manufacturing" => Self::Manufacturing,
            "automotive" => Self::Automotive,
            _ => Self::Other(lowered),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Energy => "energy",
            Self::Utilities => "utilities",
            Self::OilAndGas => "oil & gas",
            Self::Technology => "technology",
            Self::Finance => "finance",
            Self::Manufacturing => "manufacturing",
            Self::Automotive => "automotive",
            Self::Other(name) => name,
        }
    }

    /// Description phrase and the severity it raises a gap to.
    pub fn severity_rule(&self) -> Option<(&'static str, Severity)> {
        match self {
            Self::Energy | Self::Utilities | Self::OilAndGas => Some(("emission", Severity::Critical)),
            Self::Technology | Self::Finance => Some(("data", Severity::High)),
            Self::Manufacturing | Self::Automotive => Some(("supply chain", Severity::High)),
            Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for IndustrySector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for IndustrySector {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(IndustrySector::parse("Energy"), IndustrySector::Energy);
        assert_eq!(IndustrySector::parse(" UTILITIES "), IndustrySector::Utilities);
        assert_eq!(IndustrySector::parse("Oil & Gas"), IndustrySector::OilAndGas);
        assert_eq!(IndustrySector::parse("oil and gas"), IndustrySector::OilAndGas);
    }

    #[test]
    fn unknown_sectors_are_kept() {
        let sector = IndustrySector::parse("Retail");
        assert_eq!(sector, IndustrySector::Other("retail".into()));
        assert_eq!(sector.to_string(), "retail");
        assert!(sector.severity_rule().is_none());
    }

    #[test]
    fn rules() {
        assert_eq!(
            IndustrySector::OilAndGas.severity_rule(),
            Some(("emission", Severity::Critical))
        );
        assert_eq!(IndustrySector::Finance.severity_rule(), Some(("data", Severity::High)));
        assert_eq!(
            IndustrySector::Automotive.severity_rule(),
            Some(("supply chain", Severity::High))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for sector in [
            IndustrySector::Energy,
            IndustrySector::Utilities,
            IndustrySector::OilAndGas,
            IndustrySector::Technology,
            IndustrySector::Finance,
            IndustrySector::Manufacturing,
            IndustrySector::Automotive,
        ] {
            assert_eq!(IndustrySector::parse(&sector.to_string()), sector);
        }
    }
}
