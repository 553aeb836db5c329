//! GRI universal (2-x) and topic-specific (2xx-4xx) disclosures.

use crate::pattern::PatternDef;
use crate::requirement::RequirementDef;

/// GRI disclosures. Only the universal disclosures are mandatory.
pub const REQUIREMENTS: &[RequirementDef] = &[
    RequirementDef {
        id: "GRI-2-1",
        category: "Governance",
        subcategory: "Organizational Details",
        description: "Organizational details and reporting boundary",
        keywords: &[
            "organizational structure",
            "reporting boundary",
            "subsidiaries",
            "joint ventures",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*countries.*operations").default_unit("count"),
            PatternDef::new(r"<num>\s*employees.*total").default_unit("employees"),
        ],
    },
    RequirementDef {
        id: "GRI-2-6",
        category: "Governance",
        subcategory: "Strategy and Analysis",
        description: "Statement from senior decision-maker",
        keywords: &[
            "ceo statement",
            "leadership message",
            "senior management",
            "strategy statement",
        ],
        mandatory: true,
        patterns: &[],
    },
    // Environmental topics
    RequirementDef {
        id: "GRI-305-1",
        category: "Environmental",
        subcategory: "Emissions",
        description: "Direct (Scope 1) GHG emissions",
        keywords: &["scope 1", "direct emissions", "ghg emissions", "co2 emissions"],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*(t\s?co2e?).*scope\s*1").unit(2),
            PatternDef::new(r"<num>\s*(tonnes).*direct.*emissions").unit(2),
        ],
    },
    RequirementDef {
        id: "GRI-305-2",
        category: "Environmental",
        subcategory: "Emissions",
        description: "Energy indirect (Scope 2) GHG emissions",
        keywords: &[
            "scope 2",
            "indirect emissions",
            "energy emissions",
            "electricity emissions",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*(t\s?co2e?).*scope\s*2").unit(2),
            PatternDef::new(r"<num>\s*(tonnes).*indirect.*emissions").unit(2),
        ],
    },
    RequirementDef {
        id: "GRI-305-3",
        category: "Environmental",
        subcategory: "Emissions",
        description: "Other indirect (Scope 3) GHG emissions",
        keywords: &[
            "scope 3",
            "value chain emissions",
            "supply chain emissions",
            "other indirect",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*(t\s?co2e?).*scope\s*3").unit(2),
            PatternDef::new(r"<num>\s*(tonnes).*value.*chain").unit(2),
        ],
    },
    RequirementDef {
        id: "GRI-303-3",
        category: "Environmental",
        subcategory: "Water and Effluents",
        description: "Water withdrawal",
        keywords: &[
            "water withdrawal",
            "water consumption",
            "water sources",
            "freshwater",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*(m3|megalit(?:er|re)s?).*water.*withdrawal").unit(2),
            PatternDef::new(r"<num>\s*(liters).*water").unit(2),
        ],
    },
    // Social topics
    RequirementDef {
        id: "GRI-401-1",
        category: "Social",
        subcategory: "Employment",
        description: "New employee hires and employee turnover",
        keywords: &[
            "employee turnover",
            "new hires",
            "attrition",
            "retention",
            "workforce changes",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*(%).*turnover").unit(2),
            PatternDef::new(r"<num>\s*new.*hires").default_unit("employees"),
            PatternDef::new(r"<num>\s*(%).*retention").unit(2),
        ],
    },
    RequirementDef {
        id: "GRI-405-1",
        category: "Social",
        subcategory: "Diversity and Equal Opportunity",
        description: "Diversity of governance bodies and employees",
        keywords: &[
            "diversity",
            "gender diversity",
            "age diversity",
            "ethnic diversity",
            "board composition",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*(%).*women.*board").unit(2),
            PatternDef::new(r"<num>\s*(%).*women.*management").unit(2),
        ],
    },
    RequirementDef {
        id: "GRI-403-9",
        category: "Social",
        subcategory: "Occupational Health and Safety",
        description: "Work-related injuries",
        keywords: &[
            "work injuries",
            "accident rate",
            "safety incidents",
            "occupational health",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*.*injury.*rate").default_unit("rate"),
            PatternDef::new(r"<num>\s*safety.*incidents").default_unit("count"),
        ],
    },
    // Governance topics
    RequirementDef {
        id: "GRI-205-3",
        category: "Governance",
        subcategory: "Anti-corruption",
        description: "Confirmed incidents of corruption and actions taken",
        keywords: &[
            "corruption incidents",
            "anti-corruption",
            "bribery",
            "fraud",
            "ethics violations",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*corruption.*incidents").default_unit("count"),
            PatternDef::new(r"<num>\s*ethics.*violations").default_unit("count"),
        ],
    },
];
