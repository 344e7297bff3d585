//! Education history extraction

use crate::processing::profile::EducationEntry;
use crate::processing::sections::{SectionLocator, EDUCATION_HEADINGS, EDUCATION_TERMINATORS};
use regex::Regex;

const DEGREE_KEYWORDS: &str =
    r"Bachelor|Master|PhD|B\.S\.|M\.S\.|B\.A\.|M\.A\.|M\.B\.A\.|Ph\.D\.";

pub struct EducationExtractor {
    section: SectionLocator,
    degree_token_regex: Regex,
    school_of_regex: Regex,
    degree_regex: Regex,
    school_regex: Regex,
    year_regex: Regex,
    entry_split_regex: Regex,
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EducationExtractor {
    pub fn new() -> Self {
        let degree_token_regex =
            Regex::new(&format!(r"(?i){}", DEGREE_KEYWORDS)).expect("Invalid degree token regex");

        let school_of_regex = Regex::new(r"(?i)(?:University|College|Institute|School) of [^\n,]+")
            .expect("Invalid school-of regex");

        let degree_regex = Regex::new(&format!(r"(?i)(?:{})[^,\n]*", DEGREE_KEYWORDS))
            .expect("Invalid degree regex");

        let school_regex = Regex::new(r"(?i)(?:University|College|Institute|School)[^,\n]*")
            .expect("Invalid school regex");

        let year_regex =
            Regex::new(r"(?i)(?:19|20)\d{2}(?:\s*-\s*(?:19|20)\d{2}|\s*to\s*(?:present|now))?")
                .expect("Invalid year regex");

        let entry_split_regex = Regex::new(r"\n\s*\n").expect("Invalid entry split regex");

        Self {
            section: SectionLocator::new(EDUCATION_HEADINGS, EDUCATION_TERMINATORS),
            degree_token_regex,
            school_of_regex,
            degree_regex,
            school_regex,
            year_regex,
            entry_split_regex,
        }
    }

    /// Entries come back in document order. The section must contain at
    /// least one degree keyword or a "University/College/... of" phrase
    /// before any block is considered; blocks with neither a degree nor a
    /// school are dropped silently.
    pub fn extract(&self, text: &str) -> Vec<EducationEntry> {
        let Some(section) = self.section.locate(text) else {
            return Vec::new();
        };

        if !self.degree_token_regex.is_match(section) && !self.school_of_regex.is_match(section) {
            return Vec::new();
        }

        let mut entries = Vec::new();

        for block in self.entry_split_regex.split(section) {
            if block.trim().is_empty() {
                continue;
            }

            let degree = self
                .degree_regex
                .find(block)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();

            let school = self
                .school_regex
                .find(block)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();

            if degree.is_empty() && school.is_empty() {
                continue;
            }

            let year = self
                .year_regex
                .find(block)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();

            entries.push(EducationEntry {
                degree,
                school,
                year,
            });
        }

        entries
    }
}
