//! Structured profile data extracted from a resume

use serde::{Deserialize, Serialize};

/// Contact details found near the top of a resume. Every field is optional
/// and located independently; an empty string means "not detected", not
/// "known absent".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.location.is_empty()
            && self.linkedin.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub date_range: String,
    pub description: String,
}

/// The assembled profile for one parsed document. Entries keep document
/// order; skills keep vocabulary scan order. Created once per parse and not
/// mutated afterwards; callers copy fields into their own editable state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub contact_info: ContactInfo,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_info_is_empty() {
        assert!(ContactInfo::default().is_empty());

        let contact = ContactInfo {
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        assert!(!contact.is_empty());
    }

    #[test]
    fn test_parsed_resume_serializes() {
        let resume = ParsedResume {
            contact_info: ContactInfo {
                name: "Jane Doe".to_string(),
                ..Default::default()
            },
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&resume).unwrap();
        let restored: ParsedResume = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, resume);
    }
}
