//! Reference tables: canonical skills, skill categories, spoken languages,
//! degree keywords and section header phrases.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::patterns::term_pattern;

pub const CANONICAL_SKILLS: &[&str] = &[
    // Core
    "Python", "Java", "JavaScript", "TypeScript", "Go", "C++", "C#", "SQL", "NoSQL",
    "HTML", "CSS", "React", "Node.js", "Express", "Next.js", "Django", "Flask", "FastAPI",
    "Spring", "Kubernetes", "Docker", "AWS", "GCP", "Azure", "Terraform",
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "Kafka", "Spark", "Hadoop",
    "Airflow", "Tableau", "Power BI", "Figma",
    "Machine Learning", "Deep Learning", "NLP", "Computer Vision", "PyTorch", "TensorFlow",
    "Git", "CI/CD", "REST", "GraphQL", "gRPC",
    // Data / analytics
    "Pandas", "NumPy", "scikit-learn",
    // Testing
    "Selenium", "Playwright", "Cypress", "JUnit", "pytest",
    // Mobile
    "Android", "iOS", "Swift", "Kotlin", "React Native", "Flutter",
    // DevOps / SRE
    "Linux", "Prometheus", "Grafana",
    // Security
    "OWASP", "Threat Modeling",
    // Product
    "Jira", "A/B Testing",
];

pub const SKILL_GROUPS: &[(&str, &[&str])] = &[
    ("Languages", &["Python", "Java", "JavaScript", "TypeScript", "Go", "C++", "C#", "SQL"]),
    ("Frontend", &["React", "HTML", "CSS", "Next.js"]),
    (
        "Backend",
        &["Node.js", "Express", "Django", "Flask", "FastAPI", "Spring", "GraphQL", "gRPC", "REST"],
    ),
    (
        "Data",
        &[
            "PostgreSQL", "MySQL", "MongoDB", "Redis", "Kafka", "Spark", "Airflow", "Pandas",
            "NumPy", "scikit-learn",
        ],
    ),
    (
        "ML",
        &["Machine Learning", "Deep Learning", "NLP", "Computer Vision", "PyTorch", "TensorFlow"],
    ),
    (
        "DevOps",
        &[
            "Docker", "Kubernetes", "AWS", "GCP", "Azure", "Terraform", "Linux", "CI/CD",
            "Prometheus", "Grafana",
        ],
    ),
    ("Testing", &["Selenium", "Playwright", "Cypress", "JUnit", "pytest"]),
    ("Mobile", &["Android", "iOS", "Swift", "Kotlin", "React Native", "Flutter"]),
    ("Analytics/BI", &["Tableau", "Power BI"]),
    ("Design", &["Figma"]),
    ("Security", &["OWASP", "Threat Modeling"]),
    ("Product", &["Jira", "A/B Testing"]),
];

pub const SPOKEN_LANGUAGES: &[&str] = &[
    "English", "Hindi", "French", "German", "Spanish", "Italian", "Mandarin", "Japanese", "Korean",
];

pub const EDUCATION_HEADERS: &[&str] = &["education", "academics"];
pub const EXPERIENCE_HEADERS: &[&str] = &["experience", "work history", "employment"];
pub const PROJECT_HEADERS: &[&str] = &["projects", "personal projects"];
pub const CERTIFICATION_HEADERS: &[&str] = &["certifications", "licenses", "certs"];

/// Every header phrase, in section order.
pub fn all_header_phrases() -> impl Iterator<Item = &'static str> {
    EDUCATION_HEADERS
        .iter()
        .chain(EXPERIENCE_HEADERS)
        .chain(PROJECT_HEADERS)
        .chain(CERTIFICATION_HEADERS)
        .copied()
}

/// Degree words, full and abbreviated, dotted forms included.
static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor|master|ph\.?\s?d|mba\b|b\.?\s?tech\b|m\.?\s?tech\b|b\.?\s?sc\b|m\.?\s?sc\b|b\.e\b|m\.e\b|b\.s\b|m\.s\b|b\.a\b|m\.a\b|bs\b|ms\b|ba\b|ma\b|mca\b|bca\b|bcom\b|mcom\b)",
    )
    .expect("valid degree regex")
});

pub fn contains_degree(line: &str) -> bool {
    DEGREE_RE.is_match(line)
}

/// Compiled patterns for the skill vocabulary, built once.
pub static SKILL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CANONICAL_SKILLS
        .iter()
        .map(|s| (*s, term_pattern(s)))
        .collect()
});

pub static LANGUAGE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SPOKEN_LANGUAGES
        .iter()
        .map(|l| (*l, term_pattern(l)))
        .collect()
});

pub fn is_canonical_skill(skill: &str) -> bool {
    CANONICAL_SKILLS.contains(&skill)
}

/// Canonical skills matching anywhere in `text`, sorted and deduplicated.
pub fn skills_in(text: &str) -> Vec<String> {
    let mut hits: Vec<String> = SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(s, _)| s.to_string())
        .collect();
    hits.sort();
    hits.dedup();
    hits
}
