//! Static pattern tables shared by the scoring and rewrite engines.
//!
//! The weak-phrase and header tables are ordered association lists, not
//! maps: substitution walks them in declaration order, and that order is
//! part of the observable output when patterns overlap.

use lazy_static::lazy_static;
use regex::Regex;

/// Section headers that ATS parsers recognize reliably.
pub const STANDARD_SECTIONS: &[&str] = &[
    "work experience",
    "professional experience",
    "employment history",
    "education",
    "skills",
    "technical skills",
    "certifications",
    "summary",
    "professional summary",
    "objective",
    "profile",
    "achievements",
    "accomplishments",
    "projects",
    "publications",
];

/// Verbs that signal strong, ownership-taking language.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "implemented",
    "developed",
    "managed",
    "led",
    "created",
    "improved",
    "increased",
    "decreased",
    "optimized",
    "delivered",
    "designed",
    "built",
    "established",
    "launched",
    "spearheaded",
    "orchestrated",
    "transformed",
    "streamlined",
    "negotiated",
    "directed",
];

/// A weak phrase and its stronger alternatives. The first alternative is
/// the one applied during automated substitution.
pub struct PhraseRule {
    pub weak: &'static str,
    pub pattern: Regex,
    pub alternatives: &'static [&'static str],
}

const WEAK_PHRASES: &[(&str, &[&str])] = &[
    ("responsible for", &["managed", "led", "oversaw", "directed"]),
    ("worked on", &["developed", "implemented", "created", "built"]),
    ("helped with", &["contributed to", "supported", "facilitated"]),
    ("duties included", &["key achievements included", "delivered"]),
    ("involved in", &["participated in", "collaborated on", "executed"]),
    ("was part of", &["contributed to", "served on", "member of"]),
    ("did", &["performed", "executed", "completed", "accomplished"]),
    ("made", &["created", "developed", "produced", "generated"]),
    ("got", &["achieved", "obtained", "secured", "acquired"]),
];

/// Header variants mapped to their canonical upper-case form. More
/// specific variants come before general ones.
const SECTION_HEADER_TABLE: &[(&str, &str)] = &[
    (r"\bemployment\s+history\b", "WORK EXPERIENCE"),
    (r"\bjob\s+history\b", "WORK EXPERIENCE"),
    (r"\bprofessional\s+experience\b", "WORK EXPERIENCE"),
    (r"\beducational\s+background\b", "EDUCATION"),
    (r"\bacademic\s+background\b", "EDUCATION"),
    (r"\bcore\s+competencies\b", "SKILLS"),
    (r"\btechnical\s+skills\b", "TECHNICAL SKILLS"),
    (r"\bprofessional\s+summary\b", "SUMMARY"),
    (r"\bcareer\s+summary\b", "SUMMARY"),
    (r"\babout\s+me\b", "SUMMARY"),
];

/// Keyword sets by industry. Lookup is by substring match against the
/// caller's industry string; the first matching entry wins.
pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "software",
        &[
            "agile",
            "scrum",
            "ci/cd",
            "devops",
            "microservices",
            "cloud",
            "aws",
            "azure",
            "docker",
            "kubernetes",
            "git",
            "rest api",
            "database",
            "testing",
            "debugging",
        ],
    ),
    (
        "marketing",
        &[
            "seo",
            "sem",
            "content marketing",
            "social media",
            "analytics",
            "campaign management",
            "brand strategy",
            "roi",
            "lead generation",
            "market research",
        ],
    ),
    (
        "finance",
        &[
            "financial analysis",
            "forecasting",
            "budgeting",
            "risk management",
            "compliance",
            "reporting",
            "excel",
            "financial modeling",
            "accounting",
            "audit",
        ],
    ),
    (
        "healthcare",
        &[
            "patient care",
            "hipaa",
            "ehr",
            "clinical",
            "healthcare administration",
            "medical records",
            "regulatory compliance",
            "quality assurance",
        ],
    ),
    (
        "sales",
        &[
            "revenue growth",
            "client acquisition",
            "pipeline management",
            "crm",
            "negotiation",
            "account management",
            "quota",
            "b2b",
            "b2c",
            "cold calling",
            "relationship building",
        ],
    ),
];

/// Extra keywords unlocked by role title fragments.
pub const LEADERSHIP_KEYWORDS: &[&str] = &["leadership", "mentoring", "team management"];
pub const MANAGEMENT_KEYWORDS: &[&str] = &[
    "project management",
    "stakeholder management",
    "strategic planning",
];
pub const TECHNICAL_ROLE_KEYWORDS: &[&str] =
    &["problem solving", "technical design", "code review"];

/// Words too common in job postings to count as signal.
pub const JD_STOP_WORDS: &[&str] = &["the", "and", "for", "with", "that", "this"];

/// Weak phrases the scoring engine counts when flagging passive language.
pub const SCORED_WEAK_PHRASES: &[&str] = &["responsible for", "duties included", "worked on"];

lazy_static! {
    /// Compiled weak-phrase rules in declaration order. Matching is
    /// case-insensitive and whole-phrase only.
    pub static ref PHRASE_IMPROVEMENTS: Vec<PhraseRule> = WEAK_PHRASES
        .iter()
        .map(|&(weak, alternatives)| PhraseRule {
            weak,
            pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(weak))).unwrap(),
            alternatives,
        })
        .collect();

    /// Compiled header-canonicalization rules in declaration order.
    pub static ref SECTION_HEADER_RULES: Vec<(Regex, &'static str)> = SECTION_HEADER_TABLE
        .iter()
        .map(|&(pattern, canonical)| {
            (Regex::new(&format!("(?i){}", pattern)).unwrap(), canonical)
        })
        .collect();

    /// Characters and constructs that confuse ATS parsers, with the label
    /// used in the reported issue.
    pub static ref ATS_PROBLEMATIC_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\|").unwrap(), "pipe characters"),
        (
            Regex::new("[\u{2022}\u{2023}\u{25E6}\u{2043}\u{2219}]").unwrap(),
            "special bullet points",
        ),
        (Regex::new(r"[^\x00-\x7F]").unwrap(), "non-ASCII characters"),
    ];
}
