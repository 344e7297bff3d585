//! Resume parsing pipeline: decode the document, then derive profile fields

use crate::config::Config;
use crate::error::{Result, ResumeParserError};
use crate::input::file_detector::FileType;
use crate::input::manager::RawDocument;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use crate::processing::contact::ContactExtractor;
use crate::processing::education::EducationExtractor;
use crate::processing::experience::ExperienceExtractor;
use crate::processing::profile::ParsedResume;
use crate::processing::skills::SkillExtractor;
use log::{debug, info};

/// Orchestrates text recovery and the four field extractors. The extractors
/// are pure functions over the decoded text; once decoding succeeds, parsing
/// cannot fail and missing fields come back empty instead of as errors.
pub struct ResumeParser {
    contact: ContactExtractor,
    education: EducationExtractor,
    skills: SkillExtractor,
    experience: ExperienceExtractor,
}

impl ResumeParser {
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self {
            contact: ContactExtractor::new(),
            education: EducationExtractor::new(),
            skills: SkillExtractor::with_custom_skills(config.extraction.custom_skills.clone())?,
            experience: ExperienceExtractor::new(),
        })
    }

    /// Parses one document into a structured profile. Fails with
    /// `UnsupportedFormat` before any decoding when the declared MIME type is
    /// not an accepted format, or with `Decode` when the document bytes
    /// cannot be turned into text; no partial profile is produced in either
    /// case.
    pub async fn parse(&self, document: &RawDocument) -> Result<ParsedResume> {
        let text = self.extract_text(document).await?;
        info!("Decoded {} characters of resume text", text.len());

        let contact_info = self.contact.extract(&text);
        let education = self.education.extract(&text);
        let skills = self.skills.extract(&text);
        let experience = self.experience.extract(&text);

        debug!(
            "Extracted {} education entries, {} skills, {} experience entries",
            education.len(),
            skills.len(),
            experience.len()
        );

        Ok(ParsedResume {
            contact_info,
            education,
            skills,
            experience,
            raw_text: text,
        })
    }

    async fn extract_text(&self, document: &RawDocument) -> Result<String> {
        match FileType::from_mime(&document.mime_type) {
            FileType::Pdf => PdfExtractor.extract(&document.bytes).await,
            FileType::Docx => DocxExtractor.extract(&document.bytes).await,
            FileType::Unknown => Err(ResumeParserError::UnsupportedFormat(
                document.mime_type.clone(),
            )),
        }
    }
}
