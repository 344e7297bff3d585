//! Resume parser: extract structured candidate profiles from PDF and DOCX resumes

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::Result;
use input::manager::InputManager;
use log::{error, info};
use output::formatter::{save_report_to_file, ReportGenerator};
use output::report::ProfileReport;
use processing::parser::ResumeParser;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse {
            file,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&file, &["pdf", "docx"])?;
            let output_format = cli::parse_output_format(&output)?;

            info!("Starting resume parse");
            println!("📄 Parsing resume: {}", file.display());

            let manager = InputManager::new();
            let document = manager.load_document(&file).await?;

            let parser = ResumeParser::with_config(&config)?;
            let resume = parser.parse(&document).await?;

            println!(
                "✅ Extraction complete: {} education entries, {} skills, {} experience entries",
                resume.education.len(),
                resume.skills.len(),
                resume.experience.len()
            );

            let report = ProfileReport::new(resume, file.to_string_lossy().to_string());
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("💾 Report saved to: {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!(
                    "Custom skills: {}",
                    if config.extraction.custom_skills.is_empty() {
                        "(none)".to_string()
                    } else {
                        config.extraction.custom_skills.join(", ")
                    }
                );
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
