use crate::parsing::vocab::{
    CERTIFICATION_HEADERS, EDUCATION_HEADERS, EXPERIENCE_HEADERS, PROJECT_HEADERS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Preamble,
    Education,
    Experience,
    Projects,
    Certifications,
}

impl Section {
    /// Matches a whole line against the header phrases.
    ///
    /// The line is trimmed, stripped of surrounding colons and lowercased; only
    /// exact equality switches sections.
    pub fn from_header(line: &str) -> Option<Section> {
        let bare = line.trim().trim_matches(':').trim().to_lowercase();
        let table: [(&[&str], Section); 4] = [
            (EDUCATION_HEADERS, Section::Education),
            (EXPERIENCE_HEADERS, Section::Experience),
            (PROJECT_HEADERS, Section::Projects),
            (CERTIFICATION_HEADERS, Section::Certifications),
        ];
        table
            .into_iter()
            .find(|(phrases, _)| phrases.contains(&bare.as_str()))
            .map(|(_, section)| section)
    }
}

/// Lines of a résumé grouped by section, each line trimmed. Blank lines are
/// kept because the bullet collector treats them as block ends.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sections<'a> {
    pub preamble: Vec<&'a str>,
    pub education: Vec<&'a str>,
    pub experience: Vec<&'a str>,
    pub projects: Vec<&'a str>,
    pub certifications: Vec<&'a str>,
}

impl<'a> Sections<'a> {
    fn bucket_mut(&mut self, section: Section) -> &mut Vec<&'a str> {
        match section {
            Section::Preamble => &mut self.preamble,
            Section::Education => &mut self.education,
            Section::Experience => &mut self.experience,
            Section::Projects => &mut self.projects,
            Section::Certifications => &mut self.certifications,
        }
    }
}

pub fn split_sections(text: &str) -> Sections<'_> {
    let mut sections = Sections::default();
    let mut current = Section::Preamble;

    for line in text.lines().map(str::trim) {
        match Section::from_header(line) {
            Some(section) => current = section,
            None => sections.bucket_mut(current).push(line),
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_normalisation() {
        assert_eq!(Section::from_header("Experience"), Some(Section::Experience));
        assert_eq!(Section::from_header("  EXPERIENCE: "), Some(Section::Experience));
        assert_eq!(Section::from_header("Work History"), Some(Section::Experience));
        assert_eq!(Section::from_header("Personal Projects:"), Some(Section::Projects));
        assert_eq!(Section::from_header("Licenses"), Some(Section::Certifications));
        assert_eq!(Section::from_header("Academics"), Some(Section::Education));
    }

    #[test]
    fn test_header_requires_whole_line() {
        assert_eq!(Section::from_header("5 years of experience in Rust"), None);
        assert_eq!(Section::from_header("Professional Experience"), None);
    }

    #[test]
    fn test_split_excludes_header_lines_and_keeps_blanks() {
        let text = "Jane Doe\nSummary line\n\nExperience:\nAcme - Engineer\n\nEducation\nMIT";
        let s = split_sections(text);
        assert_eq!(s.preamble, vec!["Jane Doe", "Summary line", ""]);
        assert_eq!(s.experience, vec!["Acme - Engineer", ""]);
        assert_eq!(s.education, vec!["MIT"]);
        assert!(s.projects.is_empty());
        assert!(s.certifications.is_empty());
    }

    #[test]
    fn test_section_revisited_appends() {
        let text = "Projects\nA - one\nCertifications\nAWS SA\nprojects\nB - two";
        let s = split_sections(text);
        assert_eq!(s.projects, vec!["A - one", "B - two"]);
        assert_eq!(s.certifications, vec!["AWS SA"]);
    }

    #[test]
    fn test_empty_text_yields_empty_sections() {
        assert_eq!(split_sections(""), Sections::default());
    }
}
