//! Keyword rules suggesting content categories for an icon.
//!
//! An icon matches a category when its identifier contains any of the
//! category's name keywords, or one of its tags contains any of the tag
//! keywords (case-insensitive substring match in both cases).

/// One category and the identifier and tag fragments that select it.
#[derive(Debug)]
pub struct CategoryRule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub tag_keywords: &'static [&'static str],
}

impl CategoryRule {
    fn matches(&self, identifier: &str, tags: &[String]) -> bool {
        self.keywords.iter().any(|k| identifier.contains(k))
            || tags
                .iter()
                .any(|tag| self.tag_keywords.iter().any(|k| tag.contains(k)))
    }
}

/// Rules in priority order.
pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "dental",
        keywords: &[
            "dental", "tooth", "teeth", "bur", "endodontic", "prophy", "amalgam", "composite",
        ],
        tag_keywords: &[
            "dental", "tooth", "teeth", "bur", "filling", "cavity", "enamel", "gum", "orthodontic",
            "crown", "bridge",
        ],
    },
    CategoryRule {
        category: "medical",
        keywords: &[
            "medical", "bandage", "pharma", "lab", "test", "vaccine", "syringe",
            "stethoscope", "hospital", "clinic", "patient", "specimen", "blood", "gloves",
            "mask", "ppe", "surgical", "wound", "cardiology", "exam", "diagnostic",
            "orthopedic", "diabetes", "oxygen", "scopes", "microscope",
        ],
        tag_keywords: &[
            "medical", "health", "healthcare", "medicine", "doctor", "nurse", "patient",
            "treatment", "surgery", "hospital", "clinic", "pharmaceutical", "drug", "medication",
            "diagnosis", "bandage", "wound", "injury", "safety", "protection", "ppe", "sterile",
            "hygienic",
        ],
    },
    CategoryRule {
        category: "product",
        keywords: &[
            "product-categories", "absorbent", "acrylics", "alginate", "alloys",
            "anesthetics", "apparel", "autoclaves", "cabinetry", "cadcam",
            "capital-equipment", "chairs", "cleaners", "composites", "curing",
            "desensitizing", "disposable", "equipment", "eyewear", "furniture", "gutta",
            "gypsum", "hand-hygiene", "hi-tech", "imaging", "impression", "incontinence",
            "infection-control", "instruments", "irrigating", "lab-coats", "lancets",
            "matrix", "medicaments", "mixing", "nebulizers", "nitrous", "obturation",
            "organizers", "pins-posts", "pipettes", "pit-fissure", "prophy", "protective",
            "putty", "restraints", "rotary", "rubber-dam", "scanner", "small-equipment",
            "specimen", "spirometers", "supplies", "surface", "syringe", "temporary",
            "toothbrush", "topical", "tourniquets", "ultrasonic", "unisex", "unwrap",
            "vinyl", "water-cleaning",
        ],
        tag_keywords: &[
            "product", "supplies", "equipment", "tool", "instrument", "device", "kit", "set",
        ],
    },
    CategoryRule {
        category: "corporate",
        keywords: &[
            "corporate-focus", "fortune", "admired", "centers", "business-standards",
            "governance", "code-of-ethics", "strategic", "shareholder",
        ],
        tag_keywords: &[
            "corporate", "company", "organization", "enterprise", "governance", "compliance",
            "ethics", "standards", "professional",
        ],
    },
    CategoryRule {
        category: "team-schein",
        keywords: &["team-schein", "schein-together", "team-schein-member", "volunteerism"],
        tag_keywords: &[
            "team-schein", "schein", "culture", "values", "employees", "staff", "workforce",
            "volunteer",
        ],
    },
    CategoryRule {
        category: "business",
        keywords: &["business-concepts", "business_"],
        tag_keywords: &[
            "business", "strategy", "planning", "management", "operations", "workflow", "process",
            "efficiency", "productivity", "growth", "success", "goal", "target", "achievement",
            "performance", "analysis", "data", "chart", "graph", "report",
        ],
    },
    CategoryRule {
        category: "marketing",
        keywords: &["marketing"],
        tag_keywords: &[
            "marketing", "advertising", "promotion", "campaign", "brand", "communication",
            "message", "audience", "engagement",
        ],
    },
    CategoryRule {
        category: "design-elements",
        keywords: &["design-elements"],
        tag_keywords: &["geometric", "shape", "pattern", "abstract", "decoration", "ornament"],
    },
    CategoryRule {
        category: "diversity",
        keywords: &["diversity-inclusion", "elevasian", "colegas", "wln", "black-legacy"],
        tag_keywords: &["diversity", "inclusion", "equality", "culture", "heritage", "community"],
    },
    CategoryRule {
        category: "hs-cares",
        keywords: &[
            "hs-cares", "social-responsibility", "sustainability", "environment",
        ],
        tag_keywords: &[
            "social-responsibility", "sustainability", "environment", "community", "giving",
            "impact",
        ],
    },
];

/// Categories matched by `identifier` or `tags`, in rule order.
pub fn suggest(identifier: &str, tags: &[String]) -> Vec<&'static str> {
    let identifier = identifier.to_lowercase();
    let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    let mut found: Vec<&'static str> = Vec::new();
    for rule in RULES {
        if rule.matches(&identifier, &tags) && !found.contains(&rule.category) {
            found.push(rule.category);
        }
    }
    found
}
