//! CSRD requirements, grouped by ESRS topical standard (E1-E5, S1-S4, G1).

use crate::pattern::PatternDef;
use crate::requirement::RequirementDef;

/// All CSRD requirements. Every one is mandatory.
pub const REQUIREMENTS: &[RequirementDef] = &[
    // Climate change
    RequirementDef {
        id: "CSRD-E1-1",
        category: "Environmental",
        subcategory: "Climate Change",
        description: "Transition plan for climate change mitigation",
        keywords: &[
            "transition plan",
            "climate mitigation",
            "net zero",
            "carbon neutral",
            "decarbonization",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(%).*emission.*reduction").unit(2),
            PatternDef::new(r"net\s+zero.*?(20\d{2})").default_unit("year"),
        ],
    },
    RequirementDef {
        id: "CSRD-E1-2",
        category: "Environmental",
        subcategory: "Climate Change",
        description: "Physical and transition risks from climate change",
        keywords: &[
            "physical risk",
            "transition risk",
            "climate risk",
            "scenario analysis",
        ],
        mandatory: true,
        patterns: &[PatternDef::new(r"<num>\s*(billion|million).*risk\s+exposure").unit(2)],
    },
    RequirementDef {
        id: "CSRD-E1-3",
        category: "Environmental",
        subcategory: "Climate Change",
        description: "GHG emissions and energy consumption",
        keywords: &[
            "scope 1",
            "scope 2",
            "scope 3",
            "ghg emissions",
            "greenhouse gas",
            "energy consumption",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(t\s?co2e?|tonnes?\s+co2e?)").unit(2),
            PatternDef::new(r"<num>\s*(tonnes?).*carbon").unit(2),
            PatternDef::new(r"<num>\s*(kwh|mwh|gwh)\b").unit(2),
        ],
    },
    // Pollution
    RequirementDef {
        id: "CSRD-E2-1",
        category: "Environmental",
        subcategory: "Pollution",
        description: "Air, water and soil pollution",
        keywords: &[
            "air pollution",
            "water pollution",
            "soil pollution",
            "emissions to air",
            "emissions to water",
        ],
        mandatory: true,
        patterns: &[PatternDef::new(r"<num>\s*(mg|g|kg|tonnes)\b.*pollutant").unit(2)],
    },
    // Water and marine resources
    RequirementDef {
        id: "CSRD-E3-1",
        category: "Environmental",
        subcategory: "Water and Marine Resources",
        description: "Water consumption and marine resources impact",
        keywords: &[
            "water consumption",
            "water withdrawal",
            "water discharge",
            "marine resources",
            "water stress",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(m3|liters|litres)\b.*water").unit(2),
            PatternDef::new(r"<num>\s*(megalit(?:er|re)s?)").unit(2),
        ],
    },
    // Biodiversity and ecosystems
    RequirementDef {
        id: "CSRD-E4-1",
        category: "Environmental",
        subcategory: "Biodiversity and Ecosystems",
        description: "Biodiversity and ecosystems impact",
        keywords: &[
            "biodiversity",
            "ecosystem",
            "habitat",
            "species",
            "deforestation",
            "nature",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(hectares|ha)\b.*land").unit(2),
            PatternDef::new(r"<num>\s*species.*protected").default_unit("species"),
        ],
    },
    // Resource use and circular economy
    RequirementDef {
        id: "CSRD-E5-1",
        category: "Environmental",
        subcategory: "Circular Economy",
        description: "Resource use, circular economy, and waste",
        keywords: &[
            "circular economy",
            "waste",
            "recycling",
            "material flow",
            "resource efficiency",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(tonnes|kg)\b.*waste").unit(2),
            PatternDef::new(r"<num>\s*(%).*recycl").unit(2),
        ],
    },
    // Own workforce
    RequirementDef {
        id: "CSRD-S1-1",
        category: "Social",
        subcategory: "Own Workforce",
        description: "Working conditions and equal treatment",
        keywords: &[
            "working conditions",
            "equal treatment",
            "non-discrimination",
            "diversity",
            "inclusion",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(%).*women.*management").unit(2),
            PatternDef::new(r"<num>\s*(%).*diversity").unit(2),
        ],
    },
    RequirementDef {
        id: "CSRD-S1-2",
        category: "Social",
        subcategory: "Own Workforce",
        description: "Social dialogue and collective bargaining",
        keywords: &[
            "collective bargaining",
            "trade union",
            "works council",
            "social dialogue",
        ],
        mandatory: true,
        patterns: &[PatternDef::new(r"<num>\s*(%).*covered.*collective").unit(2)],
    },
    // Workers in the value chain
    RequirementDef {
        id: "CSRD-S2-1",
        category: "Social",
        subcategory: "Workers in Value Chain",
        description: "Due diligence on working conditions in value chain",
        keywords: &[
            "value chain",
            "supply chain",
            "due diligence",
            "working conditions",
            "supplier assessment",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*(%).*suppliers.*assessed").unit(2),
            PatternDef::new(r"<num>\s*suppliers.*audited").default_unit("count"),
        ],
    },
    // Affected communities
    RequirementDef {
        id: "CSRD-S3-1",
        category: "Social",
        subcategory: "Affected Communities",
        description: "Human rights and community impact",
        keywords: &[
            "human rights",
            "community",
            "indigenous rights",
            "land rights",
            "displacement",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*communities.*engaged").default_unit("count"),
            PatternDef::new(r"<num>\s*(million|billion).*community.*investment").unit(2),
        ],
    },
    // Consumers and end-users
    RequirementDef {
        id: "CSRD-S4-1",
        category: "Social",
        subcategory: "Consumers and End-users",
        description: "Consumer and end-user safety and satisfaction",
        keywords: &[
            "consumer safety",
            "product safety",
            "data protection",
            "privacy",
            "customer satisfaction",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*safety.*incidents").default_unit("count"),
            PatternDef::new(r"<num>\s*(%).*customer.*satisfaction").unit(2),
        ],
    },
    // Business conduct
    RequirementDef {
        id: "CSRD-G1-1",
        category: "Governance",
        subcategory: "Business Conduct",
        description: "Anti-corruption and anti-bribery policies",
        keywords: &[
            "anti-corruption",
            "anti-bribery",
            "business ethics",
            "code of conduct",
            "whistleblowing",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*corruption.*cases").default_unit("count"),
            PatternDef::new(r"<num>\s*(%).*training.*ethics").unit(2),
        ],
    },
    RequirementDef {
        id: "CSRD-G1-2",
        category: "Governance",
        subcategory: "Business Conduct",
        description: "Management of relationships with suppliers",
        keywords: &[
            "supplier relationship",
            "procurement",
            "vendor management",
            "supplier code",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*suppliers.*total").default_unit("count"),
            PatternDef::new(r"<num>\s*(%).*suppliers.*compliant").unit(2),
        ],
    },
];
