//! Lexical primitives: email, phone, URL, year and date-range matchers.

use std::sync::LazyLock;

use regex::Regex;

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("valid email regex")
});

/// Optional country code, optional (parenthesized) area code, then 3-4 + 4 digits.
pub static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[\s\-.]?)?(\(?\d{3,4}\)?[\s\-.]?)?\d{3,4}[\s\-.]?\d{4}")
        .expect("valid phone regex")
});

pub static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://|www\.)[^\s)]+").expect("valid url regex")
});

pub static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid year regex"));

/// A year or the open-ended marker, used to normalise a matched date span.
static YEAR_OR_PRESENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:present|(?:19|20)\d{2})\b").expect("valid year token regex")
});

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b\.?";
const YEAR: &str = r"(?:19|20)\d{2}";

/// Ranges are tried before bare month dates so "Jan 2020 - Present" is one span.
pub static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let month_date = format!(r"{MONTH}\s*(?:\d{{1,2}},?\s*)?{YEAR}\b");
    let point = format!(r"(?:{month_date}|{YEAR}\b)");
    let separator = r"(?:\s*[-–—]\s*|\s+to\s+)";
    let pattern = format!(r"(?i)\b(?:{point}{separator}(?:{point}|present\b)|{month_date})");
    Regex::new(&pattern).expect("valid date range regex")
});

/// Dash, en-dash, em-dash or pipe with whitespace on both sides.
pub static SEGMENT_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[-–—|]\s").expect("valid separator regex"));

pub const PRESENT: &str = "Present";

/// Sort value for open-ended ranges, above any literal year.
pub const PRESENT_SENTINEL: u32 = 9999;

pub fn find_email(text: &str) -> Option<&str> {
    EMAIL_RE.find(text).map(|m| m.as_str())
}

pub fn find_phone(text: &str) -> Option<&str> {
    PHONE_RE.find(text).map(|m| m.as_str().trim())
}

pub fn find_url(text: &str) -> Option<&str> {
    URL_RE.find(text).map(|m| m.as_str())
}

pub fn find_year(text: &str) -> Option<&str> {
    YEAR_RE.find(text).map(|m| m.as_str())
}

pub fn has_contact(line: &str) -> bool {
    EMAIL_RE.is_match(line) || PHONE_RE.is_match(line) || URL_RE.is_match(line)
}

/// Splits a line on the dash/pipe separator, trimming and dropping empty segments.
pub fn split_segments(line: &str) -> Vec<&str> {
    SEGMENT_SPLIT_RE
        .split(line)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Start/end of the first date range on a line.
///
/// The first and last year-or-present tokens inside the matched span become
/// start and end; a span holding a single token has no end.
pub fn parse_date_range(line: &str) -> Option<(String, Option<String>)> {
    let span = DATE_RANGE_RE.find(line)?;
    let tokens: Vec<String> = YEAR_OR_PRESENT_RE
        .find_iter(span.as_str())
        .map(|m| normalize_year_token(m.as_str()))
        .collect();

    let start = tokens.first()?.clone();
    let end = if tokens.len() > 1 {
        tokens.last().cloned()
    } else {
        None
    };
    Some((start, end))
}

/// The line with its first date range removed and dangling separators trimmed.
pub fn strip_date_range(line: &str) -> String {
    let is_separator = |c: char| c.is_whitespace() || "-–—|,()".contains(c);
    DATE_RANGE_RE
        .replace(line, " ")
        .trim_matches(is_separator)
        .to_string()
}

fn normalize_year_token(token: &str) -> String {
    if token.eq_ignore_ascii_case(PRESENT) {
        PRESENT.to_string()
    } else {
        token.to_string()
    }
}

/// Recency rank of an end date: open-ended first, unparseable last.
pub fn end_date_rank(end: Option<&str>) -> u32 {
    match end {
        None => PRESENT_SENTINEL,
        Some(e) if e.eq_ignore_ascii_case(PRESENT) => PRESENT_SENTINEL,
        Some(e) => find_year(e).and_then(|y| y.parse().ok()).unwrap_or(0),
    }
}

/// Word-boundary pattern for a vocabulary term.
///
/// `\b` only holds next to a word character, so edges like the `+` in `C++`
/// are anchored on a non-word neighbour or the text boundary instead.
pub fn term_pattern(term: &str) -> Regex {
    let escaped = regex::escape(term);
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let prefix = match term.chars().next() {
        Some(c) if is_word(c) => r"\b",
        _ => r"(?:^|\W)",
    };
    let suffix = match term.chars().last() {
        Some(c) if is_word(c) => r"\b",
        _ => r"(?:$|\W)",
    };
    Regex::new(&format!("(?i){prefix}{escaped}{suffix}")).expect("escaped term is a valid regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_first_match() {
        let text = "contact: jane.doe@example.com or jd@work.io";
        assert_eq!(find_email(text), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_phone_with_country_code() {
        let line = "jane.doe@example.com | +1-555-123-4567";
        assert_eq!(find_phone(line), Some("+1-555-123-4567"));
    }

    #[test]
    fn test_phone_with_parenthesized_area_code() {
        assert_eq!(find_phone("Call (555) 123-4567"), Some("(555) 123-4567"));
    }

    #[test]
    fn test_url_stops_at_closing_paren() {
        let line = "Portfolio (www.janedoe.dev) and https://github.com/jane";
        let urls: Vec<_> = URL_RE.find_iter(line).map(|m| m.as_str()).collect();
        assert_eq!(urls, vec!["www.janedoe.dev", "https://github.com/jane"]);
    }

    #[test]
    fn test_date_range_month_to_present() {
        assert_eq!(
            parse_date_range("Jan 2020 - Present"),
            Some(("2020".to_string(), Some("Present".to_string())))
        );
    }

    #[test]
    fn test_date_range_month_to_month() {
        assert_eq!(
            parse_date_range("Acme | March 2017 – Sept. 2019"),
            Some(("2017".to_string(), Some("2019".to_string())))
        );
    }

    #[test]
    fn test_date_range_year_to_keyword() {
        assert_eq!(
            parse_date_range("2019 to 2021"),
            Some(("2019".to_string(), Some("2021".to_string())))
        );
        assert_eq!(
            parse_date_range("2021 to present"),
            Some(("2021".to_string(), Some("Present".to_string())))
        );
    }

    #[test]
    fn test_date_range_single_month_date_has_no_end() {
        assert_eq!(
            parse_date_range("Graduated May 2018"),
            Some(("2018".to_string(), None))
        );
    }

    #[test]
    fn test_bare_year_is_not_a_range() {
        assert_eq!(parse_date_range("Founded in 2015"), None);
        assert_eq!(parse_date_range("Marketing 2020 plan"), None);
    }

    #[test]
    fn test_strip_date_range() {
        assert_eq!(strip_date_range("MIT - B.S. in CS | 2014 - 2018"), "MIT - B.S. in CS");
        assert_eq!(strip_date_range("(Jan 2020 - Present) Acme"), "Acme");
        assert_eq!(strip_date_range("No dates here"), "No dates here");
    }

    #[test]
    fn test_end_date_rank_sentinels() {
        assert_eq!(end_date_rank(None), PRESENT_SENTINEL);
        assert_eq!(end_date_rank(Some("Present")), PRESENT_SENTINEL);
        assert_eq!(end_date_rank(Some("2018")), 2018);
        assert_eq!(end_date_rank(Some("someday")), 0);
    }

    #[test]
    fn test_split_segments_requires_spaced_separator() {
        assert_eq!(split_segments("Acme Corp - Senior Engineer"), vec!["Acme Corp", "Senior Engineer"]);
        assert_eq!(split_segments("Full-Stack Developer"), vec!["Full-Stack Developer"]);
        assert_eq!(split_segments("A | B – C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_term_pattern_word_boundaries() {
        let go = term_pattern("Go");
        assert!(go.is_match("wrote services in go and rust"));
        assert!(!go.is_match("good google"));

        let cpp = term_pattern("C++");
        assert!(cpp.is_match("Languages: C++, Rust"));
        assert!(cpp.is_match("c++"));
        assert!(!cpp.is_match("abc++"));
    }
}
