//! Output formatters for parsed resume reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ProfileReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering profile reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and optional raw-text preview
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn field_line(&self, label: &str, value: &str) -> String {
        let shown = if value.is_empty() { "—" } else { value };
        format!("  {:<10} {}\n", format!("{}:", label), self.colorize(shown, Color::White))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        let profile = &report.profile;
        let mut output = String::new();

        output.push_str(&self.format_header("📄 PARSED RESUME PROFILE"));
        output.push_str(&format!(
            "Source: {} | Parsed: {} | {} characters of text\n",
            report.metadata.source_file,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.text_length
        ));

        output.push_str(&self.format_header("Contact"));
        if profile.contact_info.is_empty() {
            output.push_str("  No contact details detected\n");
        } else {
            output.push_str(&self.field_line("Name", &profile.contact_info.name));
            output.push_str(&self.field_line("Email", &profile.contact_info.email));
            output.push_str(&self.field_line("Phone", &profile.contact_info.phone));
            output.push_str(&self.field_line("Location", &profile.contact_info.location));
            output.push_str(&self.field_line("LinkedIn", &profile.contact_info.linkedin));
        }

        output.push_str(&self.format_header(&format!("🎓 Education ({})", profile.education.len())));
        for entry in &profile.education {
            output.push_str(&format!(
                "  • {}\n",
                self.colorize(&entry.degree, Color::Green)
            ));
            if !entry.school.is_empty() {
                output.push_str(&format!("    {}\n", entry.school));
            }
            if !entry.year.is_empty() {
                output.push_str(&format!("    {}\n", self.colorize(&entry.year, Color::BrightBlack)));
            }
        }

        output.push_str(&self.format_header(&format!("🛠 Skills ({})", profile.skills.len())));
        if !profile.skills.is_empty() {
            output.push_str(&format!("  {}\n", profile.skills.join(", ")));
        }

        output.push_str(&self.format_header(&format!("💼 Experience ({})", profile.experience.len())));
        for (i, entry) in profile.experience.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} {}\n",
                i + 1,
                self.colorize(&entry.title, Color::Cyan),
                self.colorize(&format!("({})", entry.company), Color::BrightBlack)
            ));
            if !entry.date_range.is_empty() {
                output.push_str(&format!("     {}\n", entry.date_range));
            }
            if self.detailed && !entry.description.is_empty() {
                output.push_str(&format!("     {}\n", entry.description.replace('\n', "\n     ")));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Raw Text Preview"));
            output.push_str(&format!("{}\n", truncate_text(&profile.raw_text, 500)));
        }

        output.push_str(&format!(
            "\n{} Generated by resume-parser v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.parser_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ProfileReport) -> Result<String> {
        let profile = &report.profile;
        let mut output = String::new();

        output.push_str("# 📄 Parsed Resume Profile\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Source:** `{}` | **Parsed:** {}\n\n",
                report.metadata.source_file,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        output.push_str("## Contact\n\n");
        output.push_str("| Field | Value |\n");
        output.push_str("|-------|-------|\n");
        output.push_str(&format!("| Name | {} |\n", profile.contact_info.name));
        output.push_str(&format!("| Email | {} |\n", profile.contact_info.email));
        output.push_str(&format!("| Phone | {} |\n", profile.contact_info.phone));
        output.push_str(&format!("| Location | {} |\n", profile.contact_info.location));
        output.push_str(&format!("| LinkedIn | {} |\n\n", profile.contact_info.linkedin));

        output.push_str("## 🎓 Education\n\n");
        for entry in &profile.education {
            output.push_str(&format!(
                "- **{}** — {} ({})\n",
                entry.degree, entry.school, entry.year
            ));
        }
        output.push('\n');

        output.push_str("## 🛠 Skills\n\n");
        if !profile.skills.is_empty() {
            output.push_str(&format!("`{}`\n\n", profile.skills.join("`, `")));
        }

        output.push_str("## 💼 Experience\n\n");
        for entry in &profile.experience {
            output.push_str(&format!(
                "### {} — {}\n\n",
                entry.title, entry.company
            ));
            if !entry.date_range.is_empty() {
                output.push_str(&format!("*{}*\n\n", entry.date_range));
            }
            if !entry.description.is_empty() {
                output.push_str(&format!("{}\n\n", entry.description));
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by resume-parser v{}*\n",
                report.metadata.parser_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &ProfileReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Truncate text to a maximum length without cutting words
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_length).collect();
    let last_space = truncated.rfind(' ').unwrap_or(truncated.len());
    format!("{}...", &truncated[..last_space])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::profile::{ContactInfo, ParsedResume};

    fn sample_report() -> ProfileReport {
        let profile = ParsedResume {
            contact_info: ContactInfo {
                name: "Jane Doe".to_string(),
                email: "jane.doe@example.com".to_string(),
                ..Default::default()
            },
            skills: vec!["Python".to_string(), "SQL".to_string()],
            raw_text: "Jane Doe\njane.doe@example.com".to_string(),
            ..Default::default()
        };
        ProfileReport::new(profile, "resume.pdf".to_string())
    }

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("Jane Doe"));
        assert!(output.contains("jane.doe@example.com"));
        assert!(output.contains("Python, SQL"));
        // No ANSI escapes when colors are off.
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_json_output_round_trips() {
        let formatter = JsonFormatter::new(true);
        let output = formatter.format_report(&sample_report()).unwrap();

        let restored: ProfileReport = serde_json::from_str(&output).unwrap();
        assert_eq!(restored.profile.contact_info.name, "Jane Doe");
        assert_eq!(restored.profile.skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_markdown_output() {
        let formatter = MarkdownFormatter::new(true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("# 📄 Parsed Resume Profile"));
        assert!(output.contains("| Name | Jane Doe |"));
        assert!(output.contains("`Python`, `SQL`"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");

        let long = "one two three four five";
        let truncated = truncate_text(long, 12);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 15);
    }
}
