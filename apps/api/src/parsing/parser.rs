//! Parse orchestrator: one résumé text in, one `ResumeRecord` out.
//!
//! Pure and synchronous. Callers on an async runtime should run it inside
//! `tokio::task::spawn_blocking`.

use tracing::debug;

use crate::models::resume::ResumeRecord;
use crate::parsing::contact::{detect_location, extract_links, extract_summary, guess_name};
use crate::parsing::education::extract_education;
use crate::parsing::experience::extract_experience;
use crate::parsing::patterns::{find_email, find_phone};
use crate::parsing::projects::{extract_certifications, extract_projects};
use crate::parsing::sections::split_sections;
use crate::parsing::skills::{detect_language, detect_skills, detect_spoken_languages};

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Echo the input verbatim in `raw_text`.
    pub include_raw_text: bool,
}

pub fn parse_resume(text: &str, options: ParseOptions) -> ResumeRecord {
    let trimmed = text.trim();
    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let email = find_email(trimmed);
    let phone = find_phone(trimmed);
    let sections = split_sections(trimmed);
    debug!(
        preamble = sections.preamble.len(),
        education = sections.education.len(),
        experience = sections.experience.len(),
        projects = sections.projects.len(),
        certifications = sections.certifications.len(),
        "sections split"
    );

    let (skills, skill_groups) = detect_skills(trimmed);
    let projects = extract_projects(&sections.projects, &skills);

    ResumeRecord {
        detected_language: detect_language(trimmed),
        candidate_name: guess_name(&lines, email),
        email: email.map(str::to_string),
        phone: phone.map(str::to_string),
        location: detect_location(&lines),
        summary: extract_summary(&sections.preamble),
        links: extract_links(trimmed),
        spoken_languages: detect_spoken_languages(trimmed),
        education: extract_education(&sections.education),
        experience: extract_experience(&sections.experience),
        certifications: extract_certifications(&sections.certifications),
        projects,
        skills,
        skill_groups,
        raw_text: options.include_raw_text.then(|| text.to_string()),
    }
}
