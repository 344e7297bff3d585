//! Report assembly for parsed resumes

use crate::processing::profile::ParsedResume;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    pub profile: ParsedResume,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub source_file: String,
    pub generated_at: DateTime<Utc>,
    pub parser_version: String,
    pub text_length: usize,
}

impl ProfileReport {
    pub fn new(profile: ParsedResume, source_file: String) -> Self {
        let text_length = profile.raw_text.chars().count();

        Self {
            profile,
            metadata: ReportMetadata {
                source_file,
                generated_at: Utc::now(),
                parser_version: env!("CARGO_PKG_VERSION").to_string(),
                text_length,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::profile::ContactInfo;

    #[test]
    fn test_report_metadata() {
        let profile = ParsedResume {
            contact_info: ContactInfo {
                name: "Jane Doe".to_string(),
                ..Default::default()
            },
            raw_text: "Jane Doe".to_string(),
            ..Default::default()
        };

        let report = ProfileReport::new(profile, "resume.pdf".to_string());

        assert_eq!(report.metadata.source_file, "resume.pdf");
        assert_eq!(report.metadata.text_length, 8);
        assert_eq!(report.metadata.parser_version, env!("CARGO_PKG_VERSION"));
    }
}
