//! TCFD recommended disclosures across its four pillars: governance,
//! strategy, risk management, metrics and targets. All mandatory.

use crate::pattern::PatternDef;
use crate::requirement::RequirementDef;

/// TCFD recommended disclosures.
pub const REQUIREMENTS: &[RequirementDef] = &[
    // Governance
    RequirementDef {
        id: "TCFD-GOV-A",
        category: "Governance",
        subcategory: "Board Oversight",
        description: "Board's oversight of climate-related risks and opportunities",
        keywords: &[
            "board oversight",
            "climate governance",
            "board responsibility",
            "climate committee",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*board.*meetings.*climate").default_unit("count"),
            PatternDef::new(r"<num>\s*directors.*climate.*experience").default_unit("count"),
        ],
    },
    RequirementDef {
        id: "TCFD-GOV-B",
        category: "Governance",
        subcategory: "Management Role",
        description: "Management's role in assessing and managing climate-related risks",
        keywords: &[
            "management role",
            "climate management",
            "executive responsibility",
            "climate officer",
        ],
        mandatory: true,
        patterns: &[],
    },
    // Strategy
    RequirementDef {
        id: "TCFD-STR-A",
        category: "Environmental",
        subcategory: "Climate Risks and Opportunities",
        description: "Climate-related risks and opportunities identified over short, medium, and long term",
        keywords: &[
            "climate risks",
            "climate opportunities",
            "physical risk",
            "transition risk",
            "time horizons",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*climate.*risks").default_unit("count"),
            PatternDef::new(r"<num>\s*climate.*opportunities").default_unit("count"),
        ],
    },
    RequirementDef {
        id: "TCFD-STR-B",
        category: "Environmental",
        subcategory: "Business Impact",
        description: "Impact of climate-related risks and opportunities on business, strategy, and financial planning",
        keywords: &[
            "business impact",
            "strategic impact",
            "financial impact",
            "climate strategy",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(million|billion).*climate.*impact").unit(2),
            PatternDef::new(r"<num>\s*(%).*revenue.*climate").unit(2),
        ],
    },
    RequirementDef {
        id: "TCFD-STR-C",
        category: "Environmental",
        subcategory: "Climate Scenarios",
        description: "Resilience of strategy under different climate-related scenarios",
        keywords: &[
            "scenario analysis",
            "climate scenarios",
            "stress testing",
            "resilience",
            "2 degree",
            "1.5 degree",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*degree.*scenario").default_unit("°C"),
            PatternDef::new(r"<num>\s*scenarios.*analy[sz]ed").default_unit("count"),
        ],
    },
    // Risk management
    RequirementDef {
        id: "TCFD-RM-A",
        category: "Governance",
        subcategory: "Risk Identification",
        description: "Processes for identifying and assessing climate-related risks",
        keywords: &[
            "risk identification",
            "risk assessment",
            "climate risk process",
            "risk methodology",
        ],
        mandatory: true,
        patterns: &[],
    },
    RequirementDef {
        id: "TCFD-RM-B",
        category: "Governance",
        subcategory: "Risk Management",
        description: "Processes for managing climate-related risks",
        keywords: &[
            "risk management",
            "risk mitigation",
            "climate risk controls",
            "risk monitoring",
        ],
        mandatory: true,
        patterns: &[],
    },
    RequirementDef {
        id: "TCFD-RM-C",
        category: "Governance",
        subcategory: "Risk Integration",
        description: "Integration of climate-related risks into overall risk management",
        keywords: &[
            "risk integration",
            "enterprise risk",
            "integrated risk",
            "overall risk management",
        ],
        mandatory: true,
        patterns: &[],
    },
    // Metrics and targets
    RequirementDef {
        id: "TCFD-MT-A",
        category: "Environmental",
        subcategory: "Climate Metrics",
        description: "Metrics used to assess climate-related risks and opportunities",
        keywords: &[
            "climate metrics",
            "risk metrics",
            "opportunity metrics",
            "performance indicators",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*climate.*metrics").default_unit("count"),
            PatternDef::new(r"<num>\s*(million|billion).*carbon.*value").unit(2),
        ],
    },
    RequirementDef {
        id: "TCFD-MT-B",
        category: "Environmental",
        subcategory: "GHG Emissions",
        description: "Scope 1, 2, and if appropriate, Scope 3 GHG emissions and related risks",
        keywords: &[
            "scope 1",
            "scope 2",
            "scope 3",
            "ghg emissions",
            "carbon footprint",
            "emissions data",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(t\s?co2e?).*scope").unit(2),
            PatternDef::new(r"<num>\s*(tonnes).*emissions").unit(2),
        ],
    },
    RequirementDef {
        id: "TCFD-MT-C",
        category: "Environmental",
        subcategory: "Climate Targets",
        description: "Targets used to manage climate-related risks and opportunities",
        keywords: &[
            "climate targets",
            "emission targets",
            "net zero",
            "carbon neutral",
            "reduction targets",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(%).*reduction.*target").unit(2),
            PatternDef::new(r"net\s+zero.*?(20\d{2})").default_unit("year"),
            PatternDef::new(r"carbon\s+neutral.*?(20\d{2})").default_unit("year"),
        ],
    },
];
