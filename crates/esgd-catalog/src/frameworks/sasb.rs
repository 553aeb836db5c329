//! SASB industry-specific metrics plus the two general disclosures every
//! SASB report carries.

use crate::pattern::PatternDef;
use crate::requirement::RequirementDef;

/// SASB requirements.
pub const REQUIREMENTS: &[RequirementDef] = &[
    // Technology & Communications
    RequirementDef {
        id: "SASB-TC-220a.1",
        category: "Social",
        subcategory: "Data Privacy",
        description: "Description of policies and practices relating to behavioral advertising",
        keywords: &[
            "behavioral advertising",
            "data privacy",
            "user tracking",
            "advertising policies",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*privacy.*complaints").default_unit("count"),
            PatternDef::new(r"<num>\s*(million|billion).*users.*affected").unit(2),
        ],
    },
    RequirementDef {
        id: "SASB-TC-220a.2",
        category: "Social",
        subcategory: "Data Privacy",
        description: "Number of users whose information is used for secondary purposes",
        keywords: &["secondary use", "data sharing", "user data", "information use"],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*(million|billion).*users.*secondary").unit(2),
            PatternDef::new(r"<num>\s*(%).*data.*shared").unit(2),
        ],
    },
    // Extractives
    RequirementDef {
        id: "SASB-EM-EP-110a.1",
        category: "Environmental",
        subcategory: "Air Quality",
        description: "Air emissions of criteria pollutants",
        keywords: &[
            "air emissions",
            "nox",
            "sox",
            "particulate matter",
            "criteria pollutants",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*(tonnes).*nox").unit(2),
            PatternDef::new(r"<num>\s*(tonnes).*sox").unit(2),
        ],
    },
    // Financials
    RequirementDef {
        id: "SASB-FN-CB-410a.1",
        category: "Social",
        subcategory: "Financial Inclusion",
        description: "Number and amount of loans outstanding to underbanked populations",
        keywords: &[
            "financial inclusion",
            "underbanked",
            "microfinance",
            "community lending",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*(million|billion).*loans.*underbanked").unit(2),
            PatternDef::new(r"<num>\s*loans.*community").default_unit("count"),
        ],
    },
    // Health care
    RequirementDef {
        id: "SASB-HC-BP-240a.1",
        category: "Social",
        subcategory: "Product Safety",
        description: "List of products listed in the FDA's MedWatch Safety Alerts",
        keywords: &[
            "product safety",
            "fda alerts",
            "medical device safety",
            "drug safety",
        ],
        mandatory: false,
        patterns: &[
            PatternDef::new(r"<num>\s*safety.*alerts").default_unit("count"),
            PatternDef::new(r"<num>\s*product.*recalls").default_unit("count"),
        ],
    },
    // General disclosures
    RequirementDef {
        id: "SASB-GEN-000.A",
        category: "Governance",
        subcategory: "Business Model",
        description: "Description of the nature of business operations",
        keywords: &[
            "business model",
            "operations description",
            "industry description",
            "value creation",
        ],
        mandatory: true,
        patterns: &[],
    },
    RequirementDef {
        id: "SASB-GEN-000.B",
        category: "Governance",
        subcategory: "Business Environment",
        description: "Description of how the organization identifies, assesses, and manages sustainability risks",
        keywords: &[
            "sustainability risk",
            "risk management",
            "materiality assessment",
            "risk governance",
        ],
        mandatory: true,
        patterns: &[
            PatternDef::new(r"<num>\s*material.*topics").default_unit("count"),
            PatternDef::new(r"<num>\s*risks.*identified").default_unit("count"),
        ],
    },
];
