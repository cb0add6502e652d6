//! Preamble heuristics: candidate name, location, profile links and summary.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::{Link, LinkType};
use crate::parsing::bullets::strip_bullet;
use crate::parsing::patterns::{has_contact, EMAIL_RE, URL_RE};
use crate::parsing::vocab::all_header_phrases;

const NAME_SCAN_LINES: usize = 8;
const LOCATION_SCAN_LINES: usize = 10;
const LOCATION_MAX_CHARS: usize = 80;
const SUMMARY_MAX_CHARS: usize = 400;

/// Any section header phrase as a whole word, so "concerts" does not read as "certs".
static HEADER_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let phrases: Vec<String> = all_header_phrases().map(regex::escape).collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", phrases.join("|"))).expect("valid header phrase regex")
});

static NAME_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z'\-]+$").expect("valid name token regex"));

static NAME_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s|,]+").expect("valid name split regex"));

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]+,\s*[A-Za-z .\-]+(?:,\s*[A-Za-z .\-]+)?").expect("valid location regex")
});

static EMAIL_LOCAL_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[._\-]+").expect("valid local-part regex"));

/// Domain substrings in priority order; the first hit decides the type.
const LINK_PROVIDERS: &[(&[&str], LinkType)] = &[
    (&["linkedin.com"], LinkType::Linkedin),
    (&["github.com"], LinkType::Github),
    (&["leetcode.com", "hackerrank.com"], LinkType::Coding),
    (&["medium.com", "substack.com"], LinkType::Blog),
    (&["portfolio", "behance.net", "dribbble.com"], LinkType::Portfolio),
];

/// First line among the top lines carrying 2-4 capitalised words and no
/// email; otherwise a name rebuilt from the email local part.
pub fn guess_name(lines: &[&str], email: Option<&str>) -> Option<String> {
    for line in lines.iter().take(NAME_SCAN_LINES) {
        if EMAIL_RE.is_match(line) {
            continue;
        }
        let caps: Vec<&str> = NAME_SPLIT_RE
            .split(line)
            .filter(|t| NAME_TOKEN_RE.is_match(t))
            .collect();
        if (2..=4).contains(&caps.len()) {
            return Some(caps.join(" "));
        }
    }
    email.and_then(name_from_email)
}

fn name_from_email(email: &str) -> Option<String> {
    let local = email.split('@').next()?;
    let parts: Vec<String> = EMAIL_LOCAL_SPLIT_RE
        .split(local)
        .filter(|p| !p.is_empty())
        .map(capitalize)
        .collect();
    if parts.len() < 2 {
        return None;
    }
    Some(parts.into_iter().take(3).collect::<Vec<_>>().join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// First short "City, Region[, Country]" line near the top, skipping contact lines.
pub fn detect_location(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .take(LOCATION_SCAN_LINES)
        .filter(|l| !l.contains('@') && !l.to_lowercase().contains("http"))
        .find(|l| l.chars().count() < LOCATION_MAX_CHARS && LOCATION_RE.is_match(l))
        .map(|l| l.trim_matches(|c: char| c == '•' || c == '-' || c == ' ').to_string())
        .filter(|l| !l.is_empty())
}

pub fn classify_link(url: &str) -> LinkType {
    let lower = url.to_lowercase();
    LINK_PROVIDERS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, link_type)| *link_type)
        .unwrap_or(LinkType::Other)
}

/// Every distinct URL in the text, classified and sorted by type name.
///
/// Duplicates are dropped by literal URL on first sight; the sort is stable
/// so links of one type keep their order of appearance.
pub fn extract_links(text: &str) -> Vec<Link> {
    let mut seen = HashSet::new();
    let mut links: Vec<Link> = URL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|u| seen.insert(*u))
        .map(|u| Link {
            link_type: classify_link(u),
            url: if u.to_lowercase().starts_with("http") {
                u.to_string()
            } else {
                format!("https://{u}")
            },
        })
        .collect();
    links.sort_by_key(|l| l.link_type.as_str());
    links
}

/// What the summary walker does with one preamble line.
#[derive(Debug, PartialEq)]
enum SummaryStep<'a> {
    Skip,
    Stop,
    Take(&'a str),
}

fn summary_step(line: &str) -> SummaryStep<'_> {
    if has_contact(line) {
        return SummaryStep::Skip;
    }
    if HEADER_PHRASE_RE.is_match(line) {
        return SummaryStep::Stop;
    }
    match strip_bullet(line) {
        "" => SummaryStep::Skip,
        body => SummaryStep::Take(body),
    }
}

/// Free text from the preamble, up to a little past 400 characters.
pub fn extract_summary(preamble: &[&str]) -> Option<String> {
    let mut body: Vec<&str> = Vec::new();
    let mut len = 0;
    for line in preamble {
        match summary_step(line) {
            SummaryStep::Skip => continue,
            SummaryStep::Stop => break,
            SummaryStep::Take(text) => {
                len += text.chars().count() + usize::from(!body.is_empty());
                body.push(text);
                if len > SUMMARY_MAX_CHARS {
                    break;
                }
            }
        }
    }
    let summary = body.join(" ");
    let summary = summary.trim();
    (!summary.is_empty()).then(|| summary.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_first_capitalised_line() {
        let lines = ["Jane Doe", "jane.doe@example.com | +1-555-123-4567"];
        assert_eq!(guess_name(&lines, None).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_skips_email_line_and_bad_counts() {
        let lines = [
            "RESUME",
            "Jane Doe jane@x.com",
            "Senior Staff Software Engineer At Scale",
            "Mary-Anne O'Neil | Berlin",
        ];
        assert_eq!(guess_name(&lines, None).as_deref(), Some("Mary-Anne O'Neil Berlin"));
    }

    #[test]
    fn test_name_falls_back_to_email() {
        let lines = ["resume", "contact me"];
        assert_eq!(
            guess_name(&lines, Some("jane.doe@example.com")).as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            guess_name(&lines, Some("JOHN_ronald-reuel.tolkien@x.org")).as_deref(),
            Some("John Ronald Reuel")
        );
        assert_eq!(guess_name(&lines, Some("jdoe@example.com")), None);
        assert_eq!(guess_name(&lines, None), None);
    }

    #[test]
    fn test_location_detection() {
        let lines = [
            "Jane Doe",
            "jane.doe@example.com, +1 555",
            "https://a.com, b",
            "• San Francisco, CA",
        ];
        assert_eq!(detect_location(&lines).as_deref(), Some("San Francisco, CA"));
        assert_eq!(detect_location(&["Jane Doe", "Engineer"]), None);
    }

    #[test]
    fn test_location_ignores_long_lines() {
        let long = format!("Paris, France {}", "x".repeat(80));
        assert_eq!(detect_location(&[long.as_str()]), None);
    }

    #[test]
    fn test_link_classification() {
        assert_eq!(classify_link("https://github.com/alice"), LinkType::Github);
        assert_eq!(classify_link("https://www.LinkedIn.com/in/a"), LinkType::Linkedin);
        assert_eq!(classify_link("https://leetcode.com/u/a"), LinkType::Coding);
        assert_eq!(classify_link("https://a.substack.com"), LinkType::Blog);
        assert_eq!(classify_link("www.example-portfolio.com"), LinkType::Portfolio);
        assert_eq!(classify_link("www.example.com"), LinkType::Other);
    }

    #[test]
    fn test_links_normalised_deduped_and_sorted() {
        let text = "www.example-portfolio.com https://github.com/alice \
                    https://github.com/alice (www.blog.dev) https://medium.com/@a";
        let links = extract_links(text);
        let got: Vec<(&str, &str)> = links
            .iter()
            .map(|l| (l.link_type.as_str(), l.url.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("blog", "https://medium.com/@a"),
                ("github", "https://github.com/alice"),
                ("other", "https://www.blog.dev"),
                ("portfolio", "https://www.example-portfolio.com"),
            ]
        );
    }

    #[test]
    fn test_summary_skips_contact_and_stops_at_keyword() {
        let preamble = [
            "Jane Doe",
            "jane@example.com",
            "- Backend engineer focused on reliability",
            "",
            "I have experience with Rust",
            "never reached",
        ];
        assert_eq!(
            extract_summary(&preamble).as_deref(),
            Some("Jane Doe Backend engineer focused on reliability")
        );
    }

    #[test]
    fn test_summary_caps_length() {
        let line = "word ".repeat(30);
        let preamble = vec![line.trim(); 10];
        let summary = extract_summary(&preamble).unwrap();
        let single = line.trim().chars().count();
        assert!(summary.chars().count() > SUMMARY_MAX_CHARS);
        assert!(summary.chars().count() <= SUMMARY_MAX_CHARS + single + 1);
    }

    #[test]
    fn test_summary_empty_is_none() {
        assert_eq!(extract_summary(&["", "https://x.com", ""]), None);
    }

    #[test]
    fn test_summary_step_states() {
        assert_eq!(summary_step("call +1 555 123 4567"), SummaryStep::Skip);
        assert_eq!(summary_step("Selected Projects below"), SummaryStep::Stop);
        assert_eq!(summary_step("• Curious"), SummaryStep::Take("Curious"));
    }

    #[test]
    fn test_header_words_inside_other_words_do_not_stop_summary() {
        assert_eq!(
            summary_step("Enjoys concerts and hiking"),
            SummaryStep::Take("Enjoys concerts and hiking")
        );
        assert_eq!(summary_step("Licenses and certs listed below"), SummaryStep::Stop);

        let preamble = ["Sam Roe", "Enjoys concerts and hiking", "Work history follows"];
        assert_eq!(
            extract_summary(&preamble).as_deref(),
            Some("Sam Roe Enjoys concerts and hiking")
        );
    }
}
