//! Input manager for loading resume files from disk

use crate::error::{Result, ResumeParserError};
use crate::input::file_detector::FileType;
use log::info;
use std::path::Path;
use tokio::fs;

/// An uploaded document before any decoding: raw bytes plus the declared
/// MIME type. Consumed once per parse.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: String,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            file_name: String::new(),
        }
    }
}

pub struct InputManager;

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Reads a resume file and wraps it as a [`RawDocument`], deriving the
    /// declared MIME type from the file extension. Files with an extension
    /// outside the accepted formats are rejected here, before any bytes are
    /// read.
    pub async fn load_document(&self, path: &Path) -> Result<RawDocument> {
        if !path.exists() {
            return Err(ResumeParserError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let mime_type = file_type.mime_type().ok_or_else(|| {
            ResumeParserError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))
        })?;

        info!("Loading {:?} document: {}", file_type, path.display());
        let bytes = fs::read(path).await?;

        Ok(RawDocument {
            bytes,
            mime_type: mime_type.to_string(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        })
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ResumeParserError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        Ok(FileType::from_extension(extension))
    }
}
