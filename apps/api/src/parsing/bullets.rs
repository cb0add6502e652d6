/// Lines scanned after an entry anchor.
const BULLET_WINDOW: usize = 12;

const BULLET_MARKERS: &[char] = &['-', '•', '*'];

pub fn is_bullet(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_MARKERS)
}

/// Removes leading bullet markers and spaces.
pub fn strip_bullet(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c == ' ')
        .trim()
}

/// A non-bulleted line that marks the start of a new block.
fn ends_block(line: &str) -> bool {
    line.is_empty() || is_all_uppercase(line) || line.chars().count() < 3
}

/// At least one cased character and no lowercase ones.
pub fn is_all_uppercase(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

/// Collects bullet lines from `start` onward, within the scan window.
///
/// Non-bulleted lines are skipped unless they end the block.
pub fn collect_bullets(lines: &[&str], start: usize) -> Vec<String> {
    let mut bullets = Vec::new();
    for line in lines.iter().skip(start).take(BULLET_WINDOW) {
        let line = line.trim();
        if is_bullet(line) {
            bullets.push(strip_bullet(line).to_string());
        } else if ends_block(line) {
            break;
        }
    }
    bullets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_all_marker_kinds() {
        let lines = ["- one", "• two", "*three", "-- four"];
        assert_eq!(collect_bullets(&lines, 0), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_stops_at_blank_line() {
        let lines = ["Header", "- a", "", "- b"];
        assert_eq!(collect_bullets(&lines, 1), vec!["a"]);
    }

    #[test]
    fn test_stops_at_uppercase_or_short_line() {
        assert_eq!(collect_bullets(&["- a", "SKILLS", "- b"], 0), vec!["a"]);
        assert_eq!(collect_bullets(&["- a", "ok", "- b"], 0), vec!["a"]);
    }

    #[test]
    fn test_skips_plain_lines_without_stopping() {
        let lines = ["Jan 2020 - Present", "- Built systems", "Some prose here", "- Led team"];
        assert_eq!(collect_bullets(&lines, 0), vec!["Built systems", "Led team"]);
    }

    #[test]
    fn test_window_is_bounded() {
        let lines: Vec<&str> = std::iter::repeat("- x").take(20).collect();
        assert_eq!(collect_bullets(&lines, 0).len(), 12);
        assert!(collect_bullets(&lines, 25).is_empty());
    }

    #[test]
    fn test_uppercase_detection() {
        assert!(is_all_uppercase("WORK EXPERIENCE"));
        assert!(!is_all_uppercase("2020 - 2021"));
        assert!(!is_all_uppercase("Acme Corp"));
    }
}
