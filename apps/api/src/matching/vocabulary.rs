//! Static matching vocabulary: skill synonyms, shared skill keywords,
//! interest keywords per category and the experience ladder.
//!
//! Order matters in every table: lookups return the first hit.

/// Canonical skill name → synonym phrases (all lower-case).
pub const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "programming",
        &["coding", "development", "software development", "programming languages"],
    ),
    ("python", &["python programming", "python development"]),
    ("javascript", &["js", "javascript programming", "web development"]),
    (
        "data analysis",
        &["analytics", "data analytics", "statistical analysis"],
    ),
    (
        "machine learning",
        &["ml", "ai", "artificial intelligence", "deep learning"],
    ),
    (
        "design",
        &["ui design", "ux design", "graphic design", "visual design"],
    ),
    (
        "marketing",
        &["digital marketing", "online marketing", "brand marketing"],
    ),
    (
        "communication",
        &["verbal communication", "written communication", "presentation"],
    ),
    ("leadership", &["team leadership", "management", "team management"]),
    (
        "problem solving",
        &["analytical thinking", "critical thinking", "troubleshooting"],
    ),
    (
        "project management",
        &["project planning", "agile", "scrum", "project coordination"],
    ),
    ("database", &["sql", "database management", "data storage"]),
    (
        "web development",
        &["frontend", "backend", "full stack", "web programming"],
    ),
    (
        "mobile development",
        &["ios", "android", "mobile apps", "app development"],
    ),
    (
        "cloud computing",
        &["aws", "azure", "google cloud", "cloud platforms"],
    ),
    (
        "cybersecurity",
        &["security", "information security", "network security"],
    ),
    ("devops", &["deployment", "ci/cd", "infrastructure", "automation"]),
    (
        "testing",
        &["qa", "quality assurance", "test automation", "software testing"],
    ),
    (
        "business analysis",
        &["requirements analysis", "business requirements", "process analysis"],
    ),
    (
        "sales",
        &["business development", "client relations", "customer acquisition"],
    ),
    (
        "finance",
        &["financial analysis", "accounting", "financial modeling"],
    ),
    (
        "content creation",
        &["content writing", "copywriting", "content strategy"],
    ),
    (
        "social media",
        &["social media marketing", "community management", "social platforms"],
    ),
    ("research", &["market research", "user research", "data research"]),
    (
        "creativity",
        &["creative thinking", "innovation", "design thinking"],
    ),
];

/// Keywords that relate two otherwise different skills when both contain one.
pub const SHARED_SKILL_KEYWORDS: &[&str] = &[
    "programming",
    "development",
    "analysis",
    "design",
    "management",
    "marketing",
];

/// Career category (lower-case) → interest keywords that count as related.
pub const CATEGORY_INTEREST_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &["programming", "computers", "software", "tech", "coding", "ai", "data"],
    ),
    (
        "design",
        &["art", "creativity", "visual", "graphics", "ui", "ux", "aesthetics"],
    ),
    (
        "marketing",
        &["advertising", "promotion", "social media", "branding", "communication"],
    ),
    (
        "business",
        &["management", "leadership", "strategy", "entrepreneurship", "finance"],
    ),
    (
        "finance",
        &["money", "investment", "banking", "accounting", "economics"],
    ),
    (
        "sales",
        &["selling", "negotiation", "customer service", "business development"],
    ),
    (
        "human resources",
        &["people", "hiring", "training", "workplace", "employee relations"],
    ),
];

/// Experience keyword → ordinal seniority.
pub const EXPERIENCE_LEVELS: &[(&str, u8)] = &[
    ("entry", 1),
    ("junior", 1),
    ("mid", 2),
    ("senior", 3),
    ("lead", 4),
    ("principal", 5),
];
