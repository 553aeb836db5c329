//! # Metric Extraction Patterns
//!
//! Category-level [`PatternDef`] tables. Every pattern captures the numeric
//! literal in group 1; patterns with a unit capture it in group 2. Unit
//! alternations list longer forms first because alternation is
//! leftmost-first.
//!
//! `\b` is only placed after alphabetic units; `%` and `³`/`²` are not word
//! characters and would never satisfy it.

use esgd_core::MetricCategory;

use crate::pattern::PatternDef;

macro_rules! pct {
    () => {
        r"(%|percent(?:age)?\b)"
    };
}

macro_rules! ghg_unit {
    () => {
        r"((?:kt\s?co2e?|kilotonnes?|mt\s?co2e?|megatonnes?|million\s+(?:metric\s+)?tonnes?|kg\s?co2e?|tco2-?e|t\s?co2e?|tonnes?\s+(?:of\s+)?co2e?(?:\s?equivalent)?|metric\s+tons?\s+(?:of\s+)?co2e?|metric\s+tons?|tonnes?|tons?|kt|mt|kg)\b)"
    };
}

macro_rules! energy_unit {
    () => {
        r"((?:twh|gwh|mwh|kwh|terajoules?|gigajoules?|megajoules?|petajoules?|tj|gj|pj|mj)\b)"
    };
}

macro_rules! water_unit {
    () => {
        r"((?:million\s+cubic\s+met(?:er|re)s?|million\s+lit(?:er|re)s?|megalit(?:er|re)s?|cubic\s+met(?:er|re)s?|m3|lit(?:er|re)s?|gallons?|ml)\b|m³)"
    };
}

macro_rules! waste_unit {
    () => {
        r"((?:metric\s+tons?|short\s+tons?|tonnes?|tons?|kilograms?|kg|mt)\b)"
    };
}

macro_rules! area_unit {
    () => {
        r"((?:hectares?|ha|acres?|km2|square\s+kilomet(?:er|re)s?)\b|km²)"
    };
}

macro_rules! scale {
    () => {
        r"((?:trillion|billion|million|thousand|bn)\b)"
    };
}

macro_rules! currency {
    () => {
        r"(?:[$€£]\s?|(?:usd|eur|gbp)\s*)"
    };
}

const EMISSIONS: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"(?:scope\s*[123]\s*(?:\([^)]*\)\s*)?)?(?:(?:total|gross|direct|indirect)\s+)?",
        r"(?:(?:ghg|greenhouse\s+gas|carbon|co2e?)\s+)?emissions?\s*(?:\([^)]*\)\s*)?",
        r"(?:(?:were|was|of|totall?ed|amounted\s+to|reached|at)\s+)?[:=]?\s*<approx><num>\s*",
        ghg_unit!()
    ))
    .unit(2)
    .scoped(),
    PatternDef::new(concat!(
        r"<num>\s*",
        ghg_unit!(),
        r"\s*(?:of\s+)?(?:(?:scope\s*[123]|total|gross|direct|indirect|ghg|greenhouse\s+gas|carbon|co2e?)\s+)*",
        r"(?:emissions?|ghg)\b"
    ))
    .unit(2)
    .scoped(),
    PatternDef::new(concat!(
        r"(?:reduced|reduction\s+(?:in|of)|decreased?|cut|lowered)\s+",
        r"(?:(?:our|total|absolute|scope\s*[123](?:\s+and\s+[123])?|ghg|greenhouse\s+gas|carbon|co2e?)\s+)*",
        r"emissions?\s+(?:by\s+)?<approx><num>\s*",
        pct!()
    ))
    .unit(2)
    .reduction(),
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+(?:reduction|decrease|cut)\s+in\s+",
        r"(?:(?:our|total|absolute|scope\s*[123]|ghg|greenhouse\s+gas|carbon|co2e?)\s+)*emissions?"
    ))
    .unit(2)
    .reduction(),
];

const ENERGY: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"(?:total\s+)?(?:energy|electricity)\s+(?:consumption|consumed|use|usage)\s*",
        r"(?:(?:was|of|totall?ed|amounted\s+to|reached)\s+)?[:=]?\s*<approx><num>\s*",
        energy_unit!()
    ))
    .unit(2),
    PatternDef::new(concat!(
        r"<num>\s*",
        energy_unit!(),
        r"\s+(?:of\s+)?(?:total\s+)?(?:energy|electricity)"
    ))
    .unit(2),
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s*(?:of\s+(?:our\s+|total\s+)?(?:energy|electricity|power)\s+)?",
        r"(?:(?:came|comes|was|is|sourced)\s+)?(?:from\s+)?renewable"
    ))
    .unit(2)
    .subtype("renewable_percentage"),
    PatternDef::new(concat!(
        r"renewable\s+(?:energy|electricity)\s*(?:share|accounted\s+for|represented|made\s+up|reached)\s*",
        r"(?:of\s+)?[:=]?\s*<approx><num>\s*",
        pct!()
    ))
    .unit(2)
    .subtype("renewable_percentage"),
    PatternDef::new(concat!(
        r"renewable\s+(?:energy|electricity)\s*(?:(?:consumption|generation|use)\s*)?[:=]?\s*<approx><num>\s*",
        energy_unit!()
    ))
    .unit(2)
    .subtype("renewable_energy"),
];

const WATER: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"(?:total\s+)?water\s+(?:usage|use|consumption|consumed|withdrawals?|withdrawn|discharged?|intake)\s*",
        r"(?:(?:was|were|of|totall?ed|amounted\s+to|reached)\s+)?[:=]?\s*<approx><num>\s*",
        water_unit!()
    ))
    .unit(2),
    PatternDef::new(concat!(
        r"<num>\s*",
        water_unit!(),
        r"\s+(?:of\s+)?(?:fresh\s*|surface\s+|ground\s*)?water"
    ))
    .unit(2),
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+(?:of\s+(?:our\s+|total\s+)?)?water\s+(?:was\s+|is\s+)?(?:recycled|reused)"
    ))
    .unit(2)
    .subtype("water_recycling_rate"),
];

const WASTE: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"(?:total\s+)?waste\s*(?:(?:generated|generation|produced)\s*)?",
        r"(?:(?:was|of|totall?ed|amounted\s+to|reached)\s+)?[:=]?\s*<approx><num>\s*",
        waste_unit!()
    ))
    .unit(2),
    PatternDef::new(concat!(
        r"<num>\s*",
        waste_unit!(),
        r"\s+(?:of\s+)?(?:(?:hazardous|non-hazardous|solid|total|general|industrial)\s+)?waste"
    ))
    .unit(2),
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+(?:of\s+(?:our\s+|all\s+|total\s+)?)?(?:waste\s+)?(?:was\s+|is\s+|were\s+)?",
        r"(?:recycled|diverted|recovered)"
    ))
    .unit(2)
    .subtype("recycling_rate"),
    PatternDef::new(concat!(
        r"(?:recycling|diversion)\s+rate\s*(?:(?:was|of|reached|at)\s+)?[:=]?\s*<approx><num>\s*",
        pct!()
    ))
    .unit(2)
    .subtype("recycling_rate"),
];

const BIODIVERSITY: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"<num>\s*",
        area_unit!(),
        r"\s+(?:of\s+)?(?:(?:protected|restored|conserved|natural|rehabilitated)\s+)*",
        r"(?:land|habitats?|areas?|forests?|wetlands?)"
    ))
    .unit(2),
    PatternDef::new(concat!(
        r"(?:protected|restored|conserved|rehabilitated)\s+(?:land|habitats?|areas?)\s*",
        r"(?:(?:of|totall?ing|covering|covered)\s+)?[:=]?\s*<approx><num>\s*",
        area_unit!()
    ))
    .unit(2),
    PatternDef::new(
        r"<num>\s+(?:(?:threatened|endangered|protected|iucn\s+red\s+list)\s+)*species",
    )
    .default_unit("species")
    .subtype("species_count"),
];

const EMPLOYMENT: &[PatternDef] = &[
    PatternDef::new(r"<num>\s*(?:full-time\s+|permanent\s+|total\s+)?(employees|workers|ftes?)\b")
        .unit(2)
        .subtype("headcount"),
    PatternDef::new(concat!(
        r"(?:total\s+)?(?:headcount|number\s+of\s+employees)\s*",
        r"(?:(?:was|of|totall?ed|reached|stood\s+at)\s+)?[:=]?\s*<approx><num>"
    ))
    .default_unit("employees")
    .subtype("headcount"),
    PatternDef::new(concat!(
        r"(?:employee\s+|staff\s+|voluntary\s+)?(?:turnover|attrition)\s*(?:rate\s*)?",
        r"(?:(?:was|of|at|stood\s+at)\s+)?[:=]?\s*<approx><num>\s*",
        pct!()
    ))
    .unit(2)
    .subtype("turnover_rate"),
    PatternDef::new(r"<num>\s+new\s+(?:hires|employees|joiners)")
        .default_unit("employees")
        .subtype("new_hires"),
];

const DIVERSITY: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+(?:of\s+)?(?:(?:our|the|all|senior|management|leadership|executive|total)\s+)*(?:women|female)"
    ))
    .unit(2)
    .subtype("gender_diversity"),
    PatternDef::new(concat!(
        r"(?:women|females|female\s+employees)\s+",
        r"(?:represent(?:ed)?|made\s+up|make\s+up|comprised?|accounted\s+for|held|hold)\s+<approx><num>\s*",
        pct!()
    ))
    .unit(2)
    .subtype("gender_diversity"),
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+(?:of\s+)?(?:(?:our|the|total)\s+)*(?:workforce|employees)\s+(?:are|were|is|identify\s+as)\s+",
        r"(?:from\s+)?(?:ethnic(?:ally)?\s+(?:diverse|minorit(?:y|ies))|minorit(?:y|ies)|under-?represented)"
    ))
    .unit(2)
    .subtype("ethnic_diversity"),
];

const HEALTH_SAFETY: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"(?:total\s+recordable\s+(?:incident|injury)\s+(?:frequency\s+)?rate|trir)\s*(?:\(trir\)\s*)?",
        r"(?:(?:was|of|at|stood\s+at)\s+)?[:=]?\s*<approx><num>"
    ))
    .default_unit("rate")
    .subtype("trir"),
    PatternDef::new(concat!(
        r"(?:lost[\s-]+time\s+(?:injury|incident)\s+(?:frequency\s+)?rate|ltifr|ltir)\s*",
        r"(?:\((?:ltifr|ltir)\)\s*)?(?:(?:was|of|at|stood\s+at)\s+)?[:=]?\s*<approx><num>"
    ))
    .default_unit("rate")
    .subtype("ltifr"),
    PatternDef::new(r"<num>\s+(?:work-related\s+)?(?:fatalit(?:y|ies)|deaths)")
        .default_unit("count")
        .subtype("fatalities"),
    PatternDef::new(
        r"<num>\s+(?:recordable\s+|lost[\s-]+time\s+|work-related\s+)?(?:injuries|safety\s+incidents)",
    )
    .default_unit("count")
    .subtype("injuries"),
];

const TRAINING: &[PatternDef] = &[
    PatternDef::new(r"<num>\s*(hours?|hrs?)\s+(?:of\s+)?(?:\w+\s+){0,2}training")
        .unit(2)
        .subtype("training_hours"),
    PatternDef::new(concat!(
        r"(?:average\s+(?:of\s+)?)?<num>\s*(?:training\s+)?(?:hours?|hrs?)\s+",
        r"(?:of\s+(?:\w+\s+)?training\s+)?per\s+(?:employee|fte|person|worker)"
    ))
    .default_unit("hours/employee")
    .subtype("training_per_employee"),
];

const COMMUNITY: &[PatternDef] = &[
    PatternDef::new(concat!(
        currency!(),
        r"?<num>\s*",
        scale!(),
        r"?\s*(?:usd|eur|gbp|dollars|euros)?\s+(?:in|to|of|for)\s+(?:local\s+)?",
        r"(?:community\s+investments?|communit(?:y|ies)|charitable\s+(?:donations|giving|causes)|charit(?:y|ies)|philanthrop\w*)"
    ))
    .unit(2)
    .subtype("community_investment"),
    PatternDef::new(concat!(
        r"community\s+investments?\s*(?:(?:was|of|totall?ed|reached|amounted\s+to)\s+)?[:=]?\s*",
        currency!(),
        r"?<num>\s*",
        scale!(),
        r"?"
    ))
    .unit(2)
    .subtype("community_investment"),
    PatternDef::new(r"<num>\s+(?:employee\s+)?volunteer(?:ing)?\s+hours")
        .default_unit("hours")
        .subtype("volunteer_hours"),
];

const BOARD_COMPOSITION: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+(?:of\s+)?(?:(?:our|the)\s+)?(?:board\s+members|board\s+directors|board|directors)\s+",
        r"(?:are\s+|were\s+|is\s+)?independent"
    ))
    .unit(2)
    .subtype("board_independence"),
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+(?:of\s+)?(?:(?:our|the)\s+)?(?:board\s+members|board\s+seats|board|directors)\s+",
        r"(?:are\s+|were\s+|is\s+)?(?:held\s+by\s+)?(?:women|female)"
    ))
    .unit(2)
    .subtype("board_gender_diversity"),
    PatternDef::new(concat!(
        r"(?:board\s+independence|independent\s+directors)\s*(?:(?:was|of|at|stood\s+at)\s+)?[:=]?\s*<approx><num>\s*",
        pct!()
    ))
    .unit(2)
    .subtype("board_independence"),
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+(?:women|female)\s+(?:on\s+(?:the\s+|our\s+)?board|board\s+members|directors)"
    ))
    .unit(2)
    .subtype("board_gender_diversity"),
];

const ETHICS: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"<num>\s+(?:confirmed\s+)?(?:incidents\s+of\s+(?:corruption|bribery)|corruption\s+(?:incidents|cases)|",
        r"cases\s+of\s+(?:corruption|bribery|fraud)|ethics\s+violations|whistleblow(?:er|ing)\s+(?:reports|cases))"
    ))
    .default_unit("count")
    .subtype("incidents"),
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+of\s+(?:our\s+|all\s+)?(?:employees|staff)\s+(?:completed|received|were\s+trained\s+(?:on|in))\s+",
        r"(?:\w+\s+){0,2}(?:ethics|anti-corruption|code\s+of\s+conduct)"
    ))
    .unit(2)
    .subtype("ethics_training_rate"),
];

const RISK_MANAGEMENT: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"(?:identified|assessed)\s+<approx><num>\s+",
        r"(?:(?:material|climate[\s-]related|principal|key|significant|emerging)\s+)*(?:risks|topics)"
    ))
    .default_unit("count")
    .subtype("risks_identified"),
    PatternDef::new(concat!(
        r"<num>\s+(?:(?:material|climate[\s-]related|principal|key|significant|emerging)\s+)+",
        r"(?:risks|topics|issues)"
    ))
    .default_unit("count")
    .subtype("risks_identified"),
];

const COMPENSATION: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"(?:ceo|chief\s+executive)(?:[\s-]+to[\s-]+(?:median\s+)?(?:employee|worker))?\s+pay\s+ratio\s*",
        r"(?:(?:was|of|is|at|stood\s+at)\s+)?[:=]?\s*<approx><num>"
    ))
    .default_unit("ratio")
    .subtype("pay_ratio"),
    PatternDef::new(concat!(
        r"<num>\s*",
        pct!(),
        r"\s+of\s+(?:\w+\s+){0,3}(?:compensation|remuneration|bonus(?:es)?|incentives?|pay)\s+",
        r"(?:is\s+|was\s+)?(?:linked|tied)\s+to\s+(?:esg|sustainability|climate)"
    ))
    .unit(2)
    .subtype("esg_linked_pay"),
    PatternDef::new(concat!(
        r"gender\s+pay\s+gap\s*(?:(?:was|of|is|at|stood\s+at)\s+)?[:=]?\s*<approx><num>\s*",
        pct!()
    ))
    .unit(2)
    .subtype("gender_pay_gap"),
];

const COMPLIANCE: &[PatternDef] = &[PatternDef::new(concat!(
    r"<num>\s+(?:significant\s+|material\s+)?(?:environmental\s+|regulatory\s+)?",
    r"(?:fines|penalties|sanctions|breaches|violations|non-compliance\s+(?:incidents|cases))"
))
.default_unit("count")
.subtype("incidents")];

const FINANCIAL: &[PatternDef] = &[
    PatternDef::new(concat!(
        r"(?:revenues?|net\s+sales|net\s+income|operating\s+income|capex|capital\s+expenditures?)\s*",
        r"(?:(?:of|was|were|totall?ed|reached|amounted\s+to)\s+)?[:=]?\s*",
        currency!(),
        r"?<num>\s*",
        scale!()
    ))
    .unit(2),
    PatternDef::new(concat!(
        currency!(),
        r"<num>\s*",
        scale!(),
        r"\s+(?:in\s+|of\s+)?(?:green|sustainable|sustainability|climate|esg)[\s-]+(?:linked\s+)?",
        r"(?:bonds?|financing|loans?|investments?|revenues?)"
    ))
    .unit(2)
    .subtype("sustainable_finance"),
];

/// Extraction patterns declared for `category`.
pub fn definitions(category: MetricCategory) -> &'static [PatternDef] {
    match category {
        MetricCategory::Emissions => EMISSIONS,
        MetricCategory::Energy => ENERGY,
        MetricCategory::Water => WATER,
        MetricCategory::Waste => WASTE,
        MetricCategory::Biodiversity => BIODIVERSITY,
        MetricCategory::Employment => EMPLOYMENT,
        MetricCategory::Diversity => DIVERSITY,
        MetricCategory::HealthSafety => HEALTH_SAFETY,
        MetricCategory::Training => TRAINING,
        MetricCategory::Community => COMMUNITY,
        MetricCategory::BoardComposition => BOARD_COMPOSITION,
        MetricCategory::Ethics => ETHICS,
        MetricCategory::RiskManagement => RISK_MANAGEMENT,
        MetricCategory::Compensation => COMPENSATION,
        MetricCategory::Compliance => COMPLIANCE,
        MetricCategory::Financial => FINANCIAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::CompiledPattern;

    fn compiled(category: MetricCategory) -> Vec<CompiledPattern> {
        definitions(category)
            .iter()
            .enumerate()
            .map(|(i, def)| {
                CompiledPattern::compile(def.to_spec(format!("{category}.{i}")))
                    .unwrap_or_else(|e| panic!("{category}.{i}: {e}"))
            })
            .collect()
    }

    fn first_capture(category: MetricCategory, text: &str) -> Option<(String, Option<String>)> {
        compiled(category).into_iter().find_map(|p| {
            p.regex.captures(text).map(|caps| {
                let value = caps.get(p.spec.value_group).map(|m| m.as_str().to_string());
                let unit = p
                    .spec
                    .unit_group
                    .and_then(|g| caps.get(g))
                    .map(|m| m.as_str().to_string());
                (value.unwrap_or_default(), unit)
            })
        })
    }

    #[test]
    fn every_category_has_patterns_that_compile() {
        for category in MetricCategory::all() {
            assert!(!definitions(*category).is_empty(), "{category} has no patterns");
            compiled(*category);
        }
    }

    #[test]
    fn emissions_value_before_unit() {
        let (value, unit) =
            first_capture(MetricCategory::Emissions, "Scope 1 emissions: 45,000 tCO2e.").unwrap();
        assert_eq!(value, "45,000");
        assert_eq!(unit.as_deref(), Some("tCO2e"));
    }

    #[test]
    fn emissions_unit_prefers_longest_form() {
        let (_, unit) =
            first_capture(MetricCategory::Emissions, "GHG emissions of 1.2 ktCO2e").unwrap();
        assert_eq!(unit.as_deref(), Some("ktCO2e"));
        let (_, unit) = first_capture(
            MetricCategory::Emissions,
            "we emitted 300 tonnes of CO2e emissions",
        )
        .unwrap();
        assert_eq!(unit.as_deref(), Some("tonnes of CO2e"));
    }

    #[test]
    fn emissions_reduction_is_flagged() {
        let defs = definitions(MetricCategory::Emissions);
        assert!(defs.iter().any(|d| d.is_reduction));
        assert!(defs.iter().filter(|d| !d.is_reduction).all(|d| d.scoped));
    }

    #[test]
    fn energy_and_renewable_share() {
        let text = "Energy consumption: 450 GWh (35% from renewable sources).";
        let (value, unit) = first_capture(MetricCategory::Energy, text).unwrap();
        assert_eq!(value, "450");
        assert_eq!(unit.as_deref(), Some("GWh"));

        let renewable = compiled(MetricCategory::Energy)
            .into_iter()
            .find(|p| p.spec.metric_subtype.as_deref() == Some("renewable_percentage"))
            .unwrap();
        let caps = renewable.regex.captures(text).unwrap();
        assert_eq!(&caps[1], "35");
        assert_eq!(&caps[2], "%");
    }

    #[test]
    fn water_million_cubic_meters() {
        let (value, unit) =
            first_capture(MetricCategory::Water, "Water usage: 2.5 million cubic meters.").unwrap();
        assert_eq!(value, "2.5");
        assert_eq!(unit.as_deref(), Some("million cubic meters"));
    }

    #[test]
    fn water_unit_with_superscript() {
        let (value, unit) =
            first_capture(MetricCategory::Water, "water withdrawal of 1,200 m³ in total").unwrap();
        assert_eq!(value, "1,200");
        assert_eq!(unit.as_deref(), Some("m³"));
    }

    #[test]
    fn hedged_values_after_the_metric_name() {
        let cases = [
            (MetricCategory::Emissions, "Scope 1 emissions of approximately 1,000 tCO2e.", "1,000"),
            (MetricCategory::Emissions, "Scope 1 emissions: approximately 1,000 tCO2e.", "1,000"),
            (
                MetricCategory::Emissions,
                "Scope 3 emissions were approximately 1.2 million tonnes CO2e.",
                "1.2",
            ),
            (MetricCategory::Energy, "Energy consumption was approximately 450 GWh.", "450"),
            (MetricCategory::Water, "Water consumption of around 300 m3.", "300"),
            (MetricCategory::Waste, "Total waste generated was roughly 80 tonnes.", "80"),
            (MetricCategory::HealthSafety, "TRIR was about 0.5 this year.", "0.5"),
        ];
        for (category, text, expected) in cases {
            let (value, _) = first_capture(category, text).unwrap_or_else(|| panic!("{text}"));
            assert_eq!(value, expected, "{text}");
        }
    }

    #[test]
    fn waste_generated_kg() {
        let (value, unit) = first_capture(MetricCategory::Waste, "Waste generated: 50 kg").unwrap();
        assert_eq!(value, "50");
        assert_eq!(unit.as_deref(), Some("kg"));
    }

    #[test]
    fn fixed_unit_patterns_have_no_unit_group() {
        let (value, unit) =
            first_capture(MetricCategory::HealthSafety, "TRIR of 0.42 across sites").unwrap();
        assert_eq!(value, "0.42");
        assert!(unit.is_none());
    }

    #[test]
    fn ranges_and_approximations_are_captured_whole() {
        let (value, _) =
            first_capture(MetricCategory::Training, "100-150 hours of training were delivered")
                .unwrap();
        assert_eq!(value, "100-150");
        let (value, _) =
            first_capture(MetricCategory::Employment, "we employ ~300 employees").unwrap();
        assert_eq!(value, "~300");
    }

    #[test]
    fn unrelated_text_does_not_match() {
        for category in MetricCategory::all() {
            assert!(
                first_capture(*category, "The weather was pleasant this spring.").is_none(),
                "{category} matched unrelated text"
            );
        }
    }
}
