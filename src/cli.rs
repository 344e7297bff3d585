//! CLI interface for the resume parser

use crate::error::{Result, ResumeParserError};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-parser")]
#[command(about = "Extract structured candidate profiles from resume files")]
#[command(
    long_about = "Parse PDF and DOCX resumes into structured contact, education, skill, and experience data using layered text heuristics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume into a structured profile
    Parse {
        /// Path to resume file (PDF, DOCX)
        file: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file instead of printing it
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show detailed extraction results
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(ResumeParserError::InvalidInput(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        ))),
    }
}

/// Validate file extension against the accepted resume formats
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if allowed_extensions.contains(&ext.to_lowercase().as_str()) => Ok(()),
        Some(ext) => Err(ResumeParserError::InvalidInput(format!(
            "Unsupported file extension: .{}. Allowed: {}",
            ext,
            allowed_extensions.join(", ")
        ))),
        None => Err(ResumeParserError::InvalidInput(
            "File has no extension".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.pdf"), &["pdf", "docx"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.DOCX"), &["pdf", "docx"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.txt"), &["pdf", "docx"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf", "docx"]).is_err());
    }
}
