//! Resume parser library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeParserError};
pub use input::manager::{InputManager, RawDocument};
pub use processing::parser::ResumeParser;
pub use processing::profile::ParsedResume;
