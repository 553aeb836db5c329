//! # Unit Tables
//!
//! One canonical unit per [`MetricCategory`] and a table of raw-unit aliases
//! with the multiplier that converts each into the canonical unit.
//!
//! Alias lookup is case-insensitive substring matching: every alias contained
//! in the raw unit is a candidate and the longest candidate wins. Equal-length
//! candidates resolve to the earlier table entry, so prefixed forms
//! (`ktco2`, `mtco2`) are listed ahead of the bare forms they overlap.

use esgd_core::MetricCategory;

/// A raw unit spelling and its multiplier into the canonical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitAlias {
    /// Lowercase substring to look for in the raw unit.
    pub alias: &'static str,
    /// Factor converting one raw unit into canonical units.
    pub multiplier: f64,
}

/// Canonical unit and alias table of one category.
#[derive(Debug)]
pub struct CategoryUnits {
    /// Category the table belongs to.
    pub category: MetricCategory,
    /// Unit every converted value is expressed in.
    pub canonical: &'static str,
    /// Known spellings.
    pub aliases: &'static [UnitAlias],
}

/// Spellings normalized to `%` in every category.
pub const PERCENT_ALIASES: &[&str] = &["%", "percent", "percentage"];

/// Dimensionless or pre-normalized units kept verbatim in every category.
pub const PASSTHROUGH_UNITS: &[&str] = &[
    "%",
    "count",
    "rate",
    "ratio",
    "species",
    "hours",
    "hours/employee",
];

const fn alias(alias: &'static str, multiplier: f64) -> UnitAlias {
    UnitAlias { alias, multiplier }
}

const EMISSIONS: CategoryUnits = CategoryUnits {
    category: MetricCategory::Emissions,
    canonical: "tCO2e",
    aliases: &[
        alias("million metric ton", 1e6),
        alias("million tonne", 1e6),
        alias("megatonne", 1e6),
        alias("mtco2", 1e6),
        alias("mt co2", 1e6),
        alias("kilotonne", 1e3),
        alias("ktco2", 1e3),
        alias("kt co2", 1e3),
        alias("kgco2", 1e-3),
        alias("kg co2", 1e-3),
        alias("tco2e", 1.0),
        alias("tco2-e", 1.0),
        alias("tco2", 1.0),
        alias("t co2", 1.0),
        alias("tonnes of co2", 1.0),
        alias("tonnes co2", 1.0),
        alias("tonne co2", 1.0),
        alias("metric ton", 1.0),
        alias("tonne", 1.0),
        alias("ton", 1.0),
        alias("kt", 1e3),
        alias("mt", 1e6),
        alias("kg", 1e-3),
    ],
};

const ENERGY: CategoryUnits = CategoryUnits {
    category: MetricCategory::Energy,
    canonical: "MWh",
    aliases: &[
        alias("terajoule", 277.778),
        alias("gigajoule", 0.277778),
        alias("megajoule", 0.000277778),
        alias("petajoule", 277_778.0),
        alias("twh", 1e6),
        alias("gwh", 1e3),
        alias("mwh", 1.0),
        alias("kwh", 1e-3),
        alias("tj", 277.778),
        alias("gj", 0.277778),
        alias("mj", 0.000277778),
        alias("pj", 277_778.0),
    ],
};

const WATER: CategoryUnits = CategoryUnits {
    category: MetricCategory::Water,
    canonical: "m³",
    aliases: &[
        alias("million cubic met", 1e3),
        alias("million lit", 1e3),
        alias("megalit", 1e3),
        alias("cubic met", 1.0),
        alias("m3", 1.0),
        alias("m³", 1.0),
        alias("liter", 1e-3),
        alias("litre", 1e-3),
        alias("gallon", 0.003_785_41),
        alias("ml", 1e3),
    ],
};

const WASTE: CategoryUnits = CategoryUnits {
    category: MetricCategory::Waste,
    canonical: "tonnes",
    aliases: &[
        alias("metric ton", 1.0),
        alias("short ton", 0.907_185),
        alias("kilogram", 1e-3),
        alias("tonne", 1.0),
        alias("ton", 0.907_185),
        alias("kg", 1e-3),
        alias("mt", 1.0),
    ],
};

const BIODIVERSITY: CategoryUnits = CategoryUnits {
    category: MetricCategory::Biodiversity,
    canonical: "hectares",
    aliases: &[
        alias("square kilomet", 100.0),
        alias("hectare", 1.0),
        alias("acre", 0.404_686),
        alias("km2", 100.0),
        alias("km²", 100.0),
        alias("ha", 1.0),
    ],
};

const EMPLOYMENT: CategoryUnits = CategoryUnits {
    category: MetricCategory::Employment,
    canonical: "employees",
    aliases: &[
        alias("employee", 1.0),
        alias("worker", 1.0),
        alias("staff", 1.0),
        alias("fte", 1.0),
    ],
};

const DIVERSITY: CategoryUnits = CategoryUnits {
    category: MetricCategory::Diversity,
    canonical: "%",
    aliases: &[],
};

const HEALTH_SAFETY: CategoryUnits = CategoryUnits {
    category: MetricCategory::HealthSafety,
    canonical: "rate",
    aliases: &[],
};

const TRAINING: CategoryUnits = CategoryUnits {
    category: MetricCategory::Training,
    canonical: "hours",
    aliases: &[alias("hour", 1.0), alias("hr", 1.0)],
};

const MONETARY: &[UnitAlias] = &[
    alias("thousand", 1e3),
    alias("million", 1e6),
    alias("billion", 1e9),
    alias("trillion", 1e12),
    alias("bn", 1e9),
];

const COMMUNITY: CategoryUnits = CategoryUnits {
    category: MetricCategory::Community,
    canonical: "USD",
    aliases: MONETARY,
};

const BOARD_COMPOSITION: CategoryUnits = CategoryUnits {
    category: MetricCategory::BoardComposition,
    canonical: "%",
    aliases: &[],
};

const ETHICS: CategoryUnits = CategoryUnits {
    category: MetricCategory::Ethics,
    canonical: "count",
    aliases: &[],
};

const RISK_MANAGEMENT: CategoryUnits = CategoryUnits {
    category: MetricCategory::RiskManagement,
    canonical: "count",
    aliases: &[],
};

const COMPENSATION: CategoryUnits = CategoryUnits {
    category: MetricCategory::Compensation,
    canonical: "ratio",
    aliases: &[],
};

const COMPLIANCE: CategoryUnits = CategoryUnits {
    category: MetricCategory::Compliance,
    canonical: "count",
    aliases: &[],
};

const FINANCIAL: CategoryUnits = CategoryUnits {
    category: MetricCategory::Financial,
    canonical: "USD",
    aliases: MONETARY,
};

/// Unit table of `category`.
pub fn for_category(category: MetricCategory) -> &'static CategoryUnits {
    match category {
        MetricCategory::Emissions => &EMISSIONS,
        MetricCategory::Energy => &ENERGY,
        MetricCategory::Water => &WATER,
        MetricCategory::Waste => &WASTE,
        MetricCategory::Biodiversity => &BIODIVERSITY,
        MetricCategory::Employment => &EMPLOYMENT,
        MetricCategory::Diversity => &DIVERSITY,
        MetricCategory::HealthSafety => &HEALTH_SAFETY,
        MetricCategory::Training => &TRAINING,
        MetricCategory::Community => &COMMUNITY,
        MetricCategory::BoardComposition => &BOARD_COMPOSITION,
        MetricCategory::Ethics => &ETHICS,
        MetricCategory::RiskManagement => &RISK_MANAGEMENT,
        MetricCategory::Compensation => &COMPENSATION,
        MetricCategory::Compliance => &COMPLIANCE,
        MetricCategory::Financial => &FINANCIAL,
    }
}

impl CategoryUnits {
    /// Best alias contained in `raw_unit` (case-insensitive): the longest,
    /// then the earliest declared.
    pub fn find_alias(&self, raw_unit: &str) -> Option<&'static UnitAlias> {
        let lowered = raw_unit.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }
        let mut best: Option<&'static UnitAlias> = None;
        for candidate in self.aliases {
            if !lowered.contains(candidate.alias) {
                continue;
            }
            match best {
                Some(b) if b.alias.len() >= candidate.alias.len() => {}
                _ => best = Some(candidate),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiplier(category: MetricCategory, raw: &str) -> Option<f64> {
        for_category(category).find_alias(raw).map(|a| a.multiplier)
    }

    #[test]
    fn tables_are_keyed_by_their_category() {
        for category in MetricCategory::all() {
            assert_eq!(for_category(*category).category, *category);
        }
    }

    #[test]
    fn aliases_are_lowercase_and_positive() {
        for category in MetricCategory::all() {
            for a in for_category(*category).aliases {
                assert_eq!(a.alias, a.alias.to_lowercase(), "{category}: {}", a.alias);
                assert!(a.multiplier > 0.0);
            }
        }
    }

    #[test]
    fn emissions_prefixed_forms_win_ties() {
        assert_eq!(multiplier(MetricCategory::Emissions, "ktCO2e"), Some(1e3));
        assert_eq!(multiplier(MetricCategory::Emissions, "MtCO2e"), Some(1e6));
        assert_eq!(multiplier(MetricCategory::Emissions, "tCO2e"), Some(1.0));
        assert_eq!(multiplier(MetricCategory::Emissions, "kg CO2e"), Some(1e-3));
        assert_eq!(multiplier(MetricCategory::Emissions, "million tonnes"), Some(1e6));
        assert_eq!(multiplier(MetricCategory::Emissions, "tonnes of CO2e"), Some(1.0));
    }

    #[test]
    fn energy_multipliers() {
        assert_eq!(multiplier(MetricCategory::Energy, "GWh"), Some(1e3));
        assert_eq!(multiplier(MetricCategory::Energy, "kWh"), Some(1e-3));
        assert_eq!(multiplier(MetricCategory::Energy, "TJ"), Some(277.778));
        assert_eq!(multiplier(MetricCategory::Energy, "terajoules"), Some(277.778));
    }

    #[test]
    fn water_longest_alias_wins() {
        assert_eq!(multiplier(MetricCategory::Water, "million cubic meters"), Some(1e3));
        assert_eq!(multiplier(MetricCategory::Water, "cubic metres"), Some(1.0));
        assert_eq!(multiplier(MetricCategory::Water, "megaliters"), Some(1e3));
        assert_eq!(multiplier(MetricCategory::Water, "liters"), Some(1e-3));
        assert_eq!(multiplier(MetricCategory::Water, "ML"), Some(1e3));
    }

    #[test]
    fn waste_tonnes_versus_short_tons() {
        assert_eq!(multiplier(MetricCategory::Waste, "kg"), Some(1e-3));
        assert_eq!(multiplier(MetricCategory::Waste, "tonnes"), Some(1.0));
        assert_eq!(multiplier(MetricCategory::Waste, "metric tons"), Some(1.0));
        assert_eq!(multiplier(MetricCategory::Waste, "short tons"), Some(0.907_185));
        assert_eq!(multiplier(MetricCategory::Waste, "tons"), Some(0.907_185));
    }

    #[test]
    fn unknown_or_empty_unit_has_no_alias() {
        assert!(for_category(MetricCategory::Energy).find_alias("barrels").is_none());
        assert!(for_category(MetricCategory::Energy).find_alias("  ").is_none());
        assert!(for_category(MetricCategory::Diversity).find_alias("%").is_none());
    }

    #[test]
    fn passthrough_includes_percent() {
        assert!(PASSTHROUGH_UNITS.contains(&"%"));
        assert!(PERCENT_ALIASES.iter().all(|a| a.to_lowercase() == *a));
    }
}
