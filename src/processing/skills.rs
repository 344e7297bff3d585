//! Skill extraction over a fixed controlled vocabulary

use crate::error::{Result, ResumeParserError};
use crate::processing::sections::{SectionLocator, SKILLS_HEADINGS, SKILLS_TERMINATORS};
use aho_corasick::AhoCorasick;

/// The recognized skill names, in scan order. Extraction only ever reports
/// membership in this list (plus configured additions), never novel terms.
pub const DEFAULT_SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "React",
    "Node.js",
    "HTML",
    "CSS",
    "Python",
    "Java",
    "SQL",
    "AWS",
    "Docker",
    "TypeScript",
    "Angular",
    "Vue.js",
    "MongoDB",
    "Express",
    "Git",
    "REST API",
    "GraphQL",
    "PHP",
    "C#",
    "C++",
    "Ruby",
    "Swift",
    "Kotlin",
    "Go",
    "Rust",
    "Scala",
    ".NET",
    "Django",
    "Flask",
    "Spring",
    "Laravel",
    "React Native",
    "Flutter",
    "Kubernetes",
    "Jenkins",
    "CI/CD",
    "Agile",
    "Scrum",
    "Product Management",
    "Project Management",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Critical Thinking",
    "Teamwork",
    "User Experience",
    "UI Design",
    "Data Analysis",
    "Machine Learning",
    "AI",
    "Big Data",
    "Data Visualization",
    "SEO",
    "Digital Marketing",
    "Content Strategy",
    "Social Media",
    "Photoshop",
    "Illustrator",
    "Figma",
    "Sketch",
    "InDesign",
    "After Effects",
    "Premiere Pro",
    "Final Cut Pro",
];

pub struct SkillExtractor {
    vocabulary: Vec<String>,
    matcher: AhoCorasick,
    section: SectionLocator,
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        Self::with_custom_skills(Vec::new())
    }

    /// Builds the extractor with the default vocabulary plus caller-supplied
    /// additions. Additions that duplicate an existing entry (ignoring case)
    /// are skipped so the result stays a set.
    pub fn with_custom_skills(additional_skills: Vec<String>) -> Result<Self> {
        let mut vocabulary: Vec<String> = DEFAULT_SKILL_VOCABULARY
            .iter()
            .map(|s| s.to_string())
            .collect();

        for skill in additional_skills {
            if !vocabulary.iter().any(|v| v.eq_ignore_ascii_case(&skill)) {
                vocabulary.push(skill);
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&vocabulary)
            .map_err(|e| {
                ResumeParserError::Configuration(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            vocabulary,
            matcher,
            section: SectionLocator::new(SKILLS_HEADINGS, SKILLS_TERMINATORS),
        })
    }

    /// Whole-word membership scan, restricted to the skills section. Text
    /// outside the section is never searched, so a skill word mentioned in
    /// prose elsewhere does not register. No section, no skills.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let Some(section) = self.section.locate(text) else {
            return Vec::new();
        };

        let mut found = vec![false; self.vocabulary.len()];

        // Overlapping matches so "JavaScript" still surfaces after the
        // embedded "Java" candidate fails the boundary check.
        for mat in self.matcher.find_overlapping_iter(section) {
            if is_whole_word(section, mat.start(), mat.end()) {
                found[mat.pattern().as_usize()] = true;
            }
        }

        self.vocabulary
            .iter()
            .zip(found)
            .filter(|(_, hit)| *hit)
            .map(|(skill, _)| skill.clone())
            .collect()
    }
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start.checked_sub(1).map(|i| bytes[i]);
    let after = bytes.get(end).copied();

    !before.map_or(false, is_word_byte) && !after.map_or(false, is_word_byte)
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
