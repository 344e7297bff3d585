//! Text extraction from the accepted document formats

use crate::error::{Result, ResumeParserError};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeParserError::Decode(format!("Failed to extract text from PDF: {}", e))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ResumeParserError::Decode(format!("Failed to open DOCX container: {}", e))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                ResumeParserError::Decode(format!("DOCX is missing its document body: {}", e))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| {
                ResumeParserError::Decode(format!("Failed to read DOCX body: {}", e))
            })?;

        Self::document_text(&xml)
    }
}

impl DocxExtractor {
    /// Pulls the raw text out of a WordprocessingML body. Paragraphs are
    /// separated by blank lines so section segmentation downstream sees the
    /// same structure a plain-text resume would have.
    fn document_text(xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => {
                    in_text_run = true;
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_text_run = false,
                    b"p" => paragraphs.push(std::mem::take(&mut current)),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"p" => paragraphs.push(String::new()),
                    b"br" => current.push('\n'),
                    b"tab" => current.push('\t'),
                    _ => {}
                },
                Ok(Event::Text(t)) if in_text_run => {
                    let piece = t.unescape().map_err(|e| {
                        ResumeParserError::Decode(format!("Malformed DOCX text run: {}", e))
                    })?;
                    current.push_str(&piece);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(ResumeParserError::Decode(format!(
                        "Malformed DOCX document body: {}",
                        e
                    )))
                }
            }
        }

        if !current.is_empty() {
            paragraphs.push(current);
        }

        Ok(paragraphs.join("\n\n"))
    }
}
