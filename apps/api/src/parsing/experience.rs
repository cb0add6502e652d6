use std::cmp::Reverse;

use crate::models::resume::ExperienceEntry;
use crate::parsing::bullets::{collect_bullets, is_all_uppercase, is_bullet};
use crate::parsing::patterns::{end_date_rank, parse_date_range, split_segments, strip_date_range};
use crate::parsing::vocab::skills_in;

const MAX_BULLETS: usize = 10;
const MAX_TECHNOLOGIES: usize = 20;

/// Title-case in the `str.istitle` sense: uppercase only after uncased
/// characters, lowercase only after cased ones, and at least one cased char.
fn is_title_case(s: &str) -> bool {
    let mut any_cased = false;
    let mut prev_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else {
            prev_cased = false;
        }
    }
    any_cased
}

fn clean(s: &str) -> Option<String> {
    let s = s.trim_matches(|c: char| c == '•' || c == '-' || c.is_whitespace());
    (!s.is_empty()).then(|| s.to_string())
}

/// Title and company from a header line.
///
/// With two or more segments, an all-caps or title-case first segment is
/// taken as the company. This misreads all-caps job titles.
fn title_and_company(line: &str) -> (Option<String>, Option<String>) {
    let header = strip_date_range(line);
    let segments = split_segments(&header);
    match segments.as_slice() {
        &[left, right, ..] if is_all_uppercase(left) || is_title_case(left) => {
            (clean(right), clean(left))
        }
        &[left, right, ..] => (clean(left), clean(right)),
        _ => (clean(&header), None),
    }
}

/// Job entries, most recent first.
///
/// A line is a header when it or the following line holds a date range. A
/// borrowed line is consumed only when it carries nothing but the dates;
/// otherwise it is left to anchor its own entry.
pub fn extract_experience(lines: &[&str]) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut next_free = 0;

    for (i, &line) in lines.iter().enumerate() {
        if i < next_free || line.is_empty() || is_bullet(line) {
            continue;
        }
        let dates = match parse_date_range(line) {
            Some(d) => d,
            None => {
                let Some(&next) = lines.get(i + 1).filter(|n| !is_bullet(n)) else {
                    continue;
                };
                let Some(d) = parse_date_range(next) else {
                    continue;
                };
                if strip_date_range(next).is_empty() {
                    next_free = i + 2;
                }
                d
            }
        };

        let (title, company) = title_and_company(line);
        let mut bullets = collect_bullets(lines, i + 1);
        let mut technologies = skills_in(&bullets.join(" "));
        technologies.truncate(MAX_TECHNOLOGIES);
        bullets.truncate(MAX_BULLETS);

        entries.push(ExperienceEntry {
            title,
            company,
            start_date: Some(dates.0),
            end_date: dates.1,
            location: None,
            bullets,
            technologies,
        });
    }

    entries.sort_by_key(|e| Reverse(end_date_rank(e.end_date.as_deref())));
    tracing::debug!(count = entries.len(), "experience entries extracted");
    entries
}
