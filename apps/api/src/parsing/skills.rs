//! Skill, skill-category and spoken-language detection over the full text.

use std::collections::BTreeMap;

use crate::parsing::vocab::{skills_in, LANGUAGE_PATTERNS, SKILL_GROUPS};

pub const DEVANAGARI_MIXED: &str = "hi-Latn/Devanagari-mixed";
pub const ENGLISH: &str = "en";

/// Flat sorted skill list plus one bucket per category.
///
/// Every category is present; its members are filtered down to the detected
/// skills and sorted.
pub fn detect_skills(text: &str) -> (Vec<String>, BTreeMap<String, Vec<String>>) {
    let skills = skills_in(text);
    let groups = SKILL_GROUPS
        .iter()
        .map(|(group, members)| {
            let mut hits: Vec<String> = members
                .iter()
                .filter(|m| skills.iter().any(|s| s == **m))
                .map(|m| m.to_string())
                .collect();
            hits.sort();
            (group.to_string(), hits)
        })
        .collect();
    (skills, groups)
}

pub fn detect_spoken_languages(text: &str) -> Vec<String> {
    let mut hits: Vec<String> = LANGUAGE_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(lang, _)| lang.to_string())
        .collect();
    hits.sort();
    hits.dedup();
    hits
}

/// Rough locale guess: any Devanagari code point marks the text as mixed Hindi.
pub fn detect_language(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let tag = if text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c)) {
        DEVANAGARI_MIXED
    } else {
        ENGLISH
    };
    Some(tag.to_string())
}
