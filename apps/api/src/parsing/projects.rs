//! Project and certification entries.

use crate::models::resume::{CertificationEntry, ProjectEntry};
use crate::parsing::bullets::{collect_bullets, is_bullet, strip_bullet};
use crate::parsing::patterns::{find_url, find_year, split_segments};
use crate::parsing::vocab::SKILL_PATTERNS;

const MAX_PROJECT_BULLETS: usize = 8;
const MAX_PROJECT_TECHNOLOGIES: usize = 15;
const MAX_PROJECT_NAME_CHARS: usize = 80;

/// Skills from `detected` that also appear in `text`, sorted.
fn technologies_in(text: &str, detected: &[String]) -> Vec<String> {
    let mut found: Vec<String> = SKILL_PATTERNS
        .iter()
        .filter(|(name, _)| detected.iter().any(|d| d.as_str() == *name))
        .filter(|(_, re)| re.is_match(text))
        .map(|(name, _)| name.to_string())
        .collect();
    found.sort();
    found.dedup();
    found
}

/// "Name - description" lines become projects; their technologies are
/// limited to skills already detected in the whole résumé.
pub fn extract_projects(lines: &[&str], detected_skills: &[String]) -> Vec<ProjectEntry> {
    let mut projects = Vec::new();
    for (i, &line) in lines.iter().enumerate() {
        if line.chars().count() < 2 || is_bullet(line) {
            continue;
        }
        let segments = split_segments(line);
        let &[name, description, ..] = segments.as_slice() else {
            continue;
        };
        if name.chars().count() >= MAX_PROJECT_NAME_CHARS {
            continue;
        }

        let mut bullets = collect_bullets(lines, i + 1);
        let mut technologies = technologies_in(&bullets.join(" "), detected_skills);
        technologies.truncate(MAX_PROJECT_TECHNOLOGIES);
        bullets.truncate(MAX_PROJECT_BULLETS);

        projects.push(ProjectEntry {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            bullets,
            technologies,
            link: find_url(line).map(str::to_string),
        });
    }
    tracing::debug!(count = projects.len(), "project entries extracted");
    projects
}

/// One certification per line of three or more characters.
pub fn extract_certifications(lines: &[&str]) -> Vec<CertificationEntry> {
    lines
        .iter()
        .filter(|l| l.chars().count() >= 3)
        .filter_map(|&line| {
            let segments = split_segments(strip_bullet(line));
            let name = segments.first().copied().filter(|n| !n.is_empty())?;
            Some(CertificationEntry {
                name: Some(name.to_string()),
                issuer: segments.get(1).map(|s| s.to_string()),
                date: find_year(line).map(str::to_string),
                license: None,
                url: find_url(line).map(str::to_string),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_project_with_bullets_and_link() {
        let lines = [
            "Resume Parser - Heuristic extractor https://github.com/jane/rp",
            "- Written in Python with FastAPI",
            "- Deployed on Docker",
            "",
        ];
        let detected = skills(&["Docker", "FastAPI", "Python", "Rust"]);
        let projects = extract_projects(&lines, &detected);
        assert_eq!(projects.len(), 1);
        let p = &projects[0];
        assert_eq!(p.name.as_deref(), Some("Resume Parser"));
        assert_eq!(
            p.description.as_deref(),
            Some("Heuristic extractor https://github.com/jane/rp")
        );
        assert_eq!(p.link.as_deref(), Some("https://github.com/jane/rp"));
        assert_eq!(p.bullets.len(), 2);
        assert_eq!(p.technologies, vec!["Docker", "FastAPI", "Python"]);
    }

    #[test]
    fn test_project_technologies_limited_to_detected() {
        let lines = ["Tool | CLI helper", "- Uses Redis"];
        let p = &extract_projects(&lines, &skills(&["Python"]))[0];
        assert!(p.technologies.is_empty());
    }

    #[test]
    fn test_project_requires_two_segments() {
        let lines = ["Just a line", "- with a bullet - and dash", "x"];
        assert!(extract_projects(&lines, &[]).is_empty());
    }

    #[test]
    fn test_project_name_length_limit() {
        let long = format!("{} - desc", "N".repeat(80));
        assert!(extract_projects(&[long.as_str()], &[]).is_empty());
    }

    #[test]
    fn test_certifications() {
        let lines = [
            "AWS Certified Solutions Architect - Amazon (2021)",
            "",
            "- CKA | CNCF | https://cncf.io/cert/123",
            "ab",
        ];
        let certs = extract_certifications(&lines);
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].name.as_deref(), Some("AWS Certified Solutions Architect"));
        assert_eq!(certs[0].issuer.as_deref(), Some("Amazon (2021)"));
        assert_eq!(certs[0].date.as_deref(), Some("2021"));
        assert!(certs[0].url.is_none());
        assert!(certs[0].license.is_none());
        assert_eq!(certs[1].name.as_deref(), Some("CKA"));
        assert_eq!(certs[1].issuer.as_deref(), Some("CNCF"));
        assert_eq!(certs[1].url.as_deref(), Some("https://cncf.io/cert/123"));
        assert!(certs[1].date.is_none());
    }
}
