//! Work experience extraction

use crate::processing::profile::ExperienceEntry;
use crate::processing::sections::{SectionLocator, EXPERIENCE_HEADINGS, EXPERIENCE_TERMINATORS};
use regex::Regex;

const MONTHS: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec|January|February|March|April|June|July|August|September|October|November|December";

pub struct ExperienceExtractor {
    section: SectionLocator,
    marker_regex: Regex,
    title_regex: Regex,
    company_regex: Regex,
    date_range_regex: Regex,
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        let marker_regex = Regex::new(&format!(r"(?i)(?:{})[\s,]+(?:19|20)\d{{2}}", MONTHS))
            .expect("Invalid date marker regex");

        let title_regex = Regex::new(r"(?i)(?:^|\n)([A-Za-z\s]+)(?:\sat\s|\s-\s|\s@\s)")
            .expect("Invalid title regex");

        let company_regex =
            Regex::new(r"(?i)(?:at|@|-)\s([A-Za-z0-9\s&,.]+)").expect("Invalid company regex");

        let date_range_regex = Regex::new(&format!(
            r"(?i)(?:{m})[\s,]+(?:19|20)\d{{2}}\s*(?:to|–|-|—)\s*(?:(?:{m})[\s,]+(?:19|20)\d{{2}}|Present|Current|Now)",
            m = MONTHS
        ))
        .expect("Invalid date range regex");

        Self {
            section: SectionLocator::new(EXPERIENCE_HEADINGS, EXPERIENCE_TERMINATORS),
            marker_regex,
            title_regex,
            company_regex,
            date_range_regex,
        }
    }

    /// Entries come back in document order. A candidate segment is emitted
    /// only when a title, company, or date range matched; everything else
    /// (bullet preambles, stray dates) is dropped silently.
    pub fn extract(&self, text: &str) -> Vec<ExperienceEntry> {
        let Some(section) = self.section.locate(text) else {
            return Vec::new();
        };

        let mut entries = Vec::new();

        for segment in self.split_entries(section) {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let title_caps = self.title_regex.captures(segment);
            let company_caps = self.company_regex.captures(segment);
            let date_match = self.date_range_regex.find(segment);

            if title_caps.is_none() && company_caps.is_none() && date_match.is_none() {
                continue;
            }

            // Field matches are removed from the description once each, in
            // match order; whatever text remains is the free-form summary.
            let mut description = segment.to_string();
            if let Some(caps) = &title_caps {
                description = description.replacen(&caps[0], "", 1);
            }
            if let Some(caps) = &company_caps {
                description = description.replacen(&caps[0], "", 1);
            }
            if let Some(m) = date_match {
                description = description.replacen(m.as_str(), "", 1);
            }

            entries.push(ExperienceEntry {
                title: title_caps
                    .as_ref()
                    .map(|caps| caps[1].trim().to_string())
                    .unwrap_or_default(),
                company: company_caps
                    .as_ref()
                    .map(|caps| caps[1].trim().to_string())
                    .unwrap_or_default(),
                date_range: date_match
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default(),
                description: description.trim().to_string(),
            });
        }

        entries
    }

    /// One candidate segment per detected month + year marker. A segment
    /// opens at the start of the line carrying its marker, so a same-line
    /// job header stays attached to its dates, and two markers on one line
    /// (a date range) open a single segment. Text before the first marker
    /// forms a leading candidate; a section with no markers at all is one
    /// candidate on its own.
    fn split_entries<'t>(&self, section: &'t str) -> Vec<&'t str> {
        let mut starts: Vec<usize> = self
            .marker_regex
            .find_iter(section)
            .map(|m| section[..m.start()].rfind('\n').map_or(0, |i| i + 1))
            .collect();
        starts.dedup();

        match starts.first() {
            None => vec![section],
            Some(&first) => {
                let mut segments = Vec::new();
                if first > 0 {
                    segments.push(&section[..first]);
                }
                for (i, &start) in starts.iter().enumerate() {
                    let end = starts.get(i + 1).copied().unwrap_or(section.len());
                    segments.push(&section[start..end]);
                }
                segments
            }
        }
    }
}
