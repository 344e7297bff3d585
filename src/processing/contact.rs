//! Contact information extraction

use crate::processing::profile::ContactInfo;
use regex::Regex;

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    location_regex: Regex,
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+")
            .expect("Invalid email regex");

        // Loose North-American-style pattern; no validation beyond the shape.
        let phone_regex = Regex::new(r"(?:\+\d{1,3}[- ]?)?\(?(?:\d{3})?\)?[- ]?\d{3}[- ]?\d{4}")
            .expect("Invalid phone regex");

        let linkedin_regex =
            Regex::new(r"(?i)linkedin\.com/in/[a-zA-Z0-9-]+").expect("Invalid profile URL regex");

        let location_regex = Regex::new(r"(?i)(?:City|Location|Address):\s*([^,\n]+(?:,\s*[A-Z]{2})?)")
            .expect("Invalid location regex");

        Self {
            email_regex,
            phone_regex,
            linkedin_regex,
            location_regex,
        }
    }

    /// Each field is located independently and the first match wins; a miss
    /// on one field never blocks the others.
    pub fn extract(&self, text: &str) -> ContactInfo {
        let mut contact = ContactInfo::default();

        if let Some(m) = self.email_regex.find(text) {
            contact.email = m.as_str().to_string();
        }

        if let Some(m) = self.phone_regex.find(text) {
            contact.phone = m.as_str().to_string();
        }

        if let Some(m) = self.linkedin_regex.find(text) {
            contact.linkedin = format!("https://www.{}", m.as_str());
        }

        contact.name = self.first_line_name(text);

        if let Some(caps) = self.location_regex.captures(text) {
            contact.location = caps[1].trim().to_string();
        }

        contact
    }

    // The first non-blank line is taken as the name when it is short and
    // contains neither an email nor a URL. Wrong whenever the document opens
    // with a title line ("CURRICULUM VITAE"); accepted as best effort.
    fn first_line_name(&self, text: &str) -> String {
        match text.lines().find(|line| !line.trim().is_empty()) {
            Some(line) if line.len() < 40 && !line.contains('@') && !line.contains("http") => {
                line.trim().to_string()
            }
            _ => String::new(),
        }
    }
}
