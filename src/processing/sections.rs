//! Resume section location by heading keywords

use regex::Regex;

pub const EDUCATION_HEADINGS: &[&str] = &[
    "EDUCATION",
    "ACADEMIC BACKGROUND",
    "ACADEMIC CREDENTIALS",
    "QUALIFICATIONS",
];
pub const EDUCATION_TERMINATORS: &[&str] =
    &["EXPERIENCE", "EMPLOYMENT", "WORK", "SKILLS", "PROJECTS"];

pub const SKILLS_HEADINGS: &[&str] = &[
    "SKILLS",
    "TECHNICAL SKILLS",
    "CORE COMPETENCIES",
    "TECHNOLOGIES",
    "EXPERTISE",
];
pub const SKILLS_TERMINATORS: &[&str] =
    &["EXPERIENCE", "EMPLOYMENT", "WORK", "EDUCATION", "PROJECTS"];

pub const EXPERIENCE_HEADINGS: &[&str] = &[
    "EXPERIENCE",
    "EMPLOYMENT",
    "WORK HISTORY",
    "PROFESSIONAL EXPERIENCE",
];
pub const EXPERIENCE_TERMINATORS: &[&str] = &["EDUCATION", "SKILLS", "PROJECTS"];

/// Locates one labeled section: the span between the first occurrence of a
/// recognized heading and the first subsequent occurrence of any terminator
/// heading, or end of text. Matching is case-insensitive and the heading may
/// be followed by whitespace or a colon.
pub struct SectionLocator {
    pattern: Regex,
}

impl SectionLocator {
    pub fn new(headings: &[&str], terminators: &[&str]) -> Self {
        let pattern = Regex::new(&format!(
            r"(?is)(?:{})[\s:]+(.*?)(?:{}|$)",
            headings.join("|"),
            terminators.join("|"),
        ))
        .expect("Invalid section pattern");

        Self { pattern }
    }

    /// Returns the section body, or `None` when no heading occurs. Callers
    /// treat an absent section as empty input rather than falling back to
    /// the whole document.
    pub fn locate<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
