use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::EducationEntry;
use crate::parsing::bullets::{collect_bullets, is_bullet};
use crate::parsing::patterns::{parse_date_range, split_segments, strip_date_range, YEAR_RE};
use crate::parsing::vocab::contains_degree;

static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bin\s+([A-Za-z& /]+)").expect("valid field regex"));

static GPA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bGPA\s*:?\s*(\d+(?:\.\d+)?(?:\s*/\s*\d+(?:\.\d+)?)?)").expect("valid gpa regex")
});

/// Lines searched for a GPA, anchor included.
const GPA_WINDOW: usize = 3;

fn is_anchor(line: &str) -> bool {
    !line.is_empty() && !is_bullet(line) && (contains_degree(line) || YEAR_RE.is_match(line))
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Degree and institution from the combined anchor line. Segment order is
/// decided by which side carries the degree keyword.
fn degree_and_institution(line: &str) -> (Option<String>, Option<String>) {
    let segments = split_segments(line);
    let first = segments.first().copied().unwrap_or_default();
    let second = segments.get(1).copied().unwrap_or_default();
    if contains_degree(first) {
        (non_empty(first), non_empty(second))
    } else {
        (non_empty(second), non_empty(first))
    }
}

fn find_gpa(lines: &[&str]) -> Option<String> {
    let window = lines.iter().take(GPA_WINDOW).copied().collect::<Vec<_>>().join(" ");
    GPA_RE
        .captures(&window)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().split_whitespace().collect())
}

pub fn extract_education(lines: &[&str]) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut next_free = 0;

    for (i, &line) in lines.iter().enumerate() {
        if i < next_free || !is_anchor(line) {
            continue;
        }
        let next = lines
            .get(i + 1)
            .copied()
            .filter(|n| !n.is_empty() && !is_bullet(n));

        let mut dates = parse_date_range(line);
        if dates.is_none() {
            if let Some(n) = next {
                dates = parse_date_range(n);
                // A dates-only line belongs to this entry; anything else may anchor its own.
                if dates.is_some() && strip_date_range(n).is_empty() {
                    next_free = i + 2;
                }
            }
        }

        let mut institution_line = line.to_string();
        if let Some(n) = next.filter(|n| n.chars().count() > line.chars().count()) {
            institution_line = format!("{n} {line}");
        }
        let (degree, institution) = degree_and_institution(&strip_date_range(&institution_line));

        let field = FIELD_RE
            .captures(line)
            .and_then(|c| c.get(1))
            .and_then(|m| non_empty(m.as_str()));
        let (start_date, end_date) = match dates {
            Some((start, end)) => (Some(start), end),
            None => (None, None),
        };

        entries.push(EducationEntry {
            institution,
            degree,
            field,
            start_date,
            end_date,
            gpa: find_gpa(&lines[i..]),
            location: None,
            highlights: collect_bullets(lines, i + 1),
        });
    }

    let mut seen = HashSet::new();
    entries.retain(|e| {
        seen.insert((e.institution.clone(), e.degree.clone(), e.end_date.clone()))
    });
    tracing::debug!(count = entries.len(), "education entries extracted");
    entries
}
