//! Integration tests for the resume parser

use resume_parser::error::ResumeParserError;
use resume_parser::input::file_detector::DOCX_MIME;
use resume_parser::processing::contact::ContactExtractor;
use resume_parser::processing::education::EducationExtractor;
use resume_parser::processing::experience::ExperienceExtractor;
use resume_parser::processing::skills::SkillExtractor;
use resume_parser::{InputManager, RawDocument, ResumeParser};
use std::io::Write;

/// Builds a minimal OOXML container with one text run per paragraph, enough
/// for the real DOCX decoding path to chew on.
fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let mut body = String::new();
    for paragraph in paragraphs {
        body.push_str(&format!(
            "<w:p><w:r><w:t>{}</w:t></w:r></w:p>",
            paragraph
        ));
    }
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn sample_resume_docx() -> Vec<u8> {
    docx_bytes(&[
        "Jane Doe",
        "jane.doe@example.com",
        "(415) 555-1234",
        "linkedin.com/in/janedoe",
        "EDUCATION",
        "Bachelor of Science, University of Example, 2020",
        "SKILLS",
        "Python, SQL, Docker",
        "EXPERIENCE",
        "Software Engineer at Example Corp, Jan 2021 - Present",
        "Built internal tools.",
    ])
}

#[tokio::test]
async fn test_parse_docx_end_to_end() {
    let parser = ResumeParser::new().unwrap();
    let document = RawDocument::new(sample_resume_docx(), DOCX_MIME);

    let resume = parser.parse(&document).await.unwrap();

    assert_eq!(resume.contact_info.name, "Jane Doe");
    assert_eq!(resume.contact_info.email, "jane.doe@example.com");
    assert_eq!(resume.contact_info.phone, "(415) 555-1234");
    assert_eq!(
        resume.contact_info.linkedin,
        "https://www.linkedin.com/in/janedoe"
    );

    assert_eq!(resume.education.len(), 1);
    assert!(resume.education[0].degree.contains("Bachelor of Science"));
    assert!(resume.education[0].school.contains("University of Example"));
    assert_eq!(resume.education[0].year, "2020");

    assert_eq!(resume.skills, vec!["Python", "SQL", "Docker"]);

    assert_eq!(resume.experience.len(), 1);
    assert!(resume.experience[0].title.contains("Software Engineer"));
    assert!(resume.experience[0].company.contains("Example Corp"));
    assert!(resume.experience[0].date_range.starts_with("Jan 2021"));
    assert!(resume.experience[0].date_range.ends_with("Present"));
    assert!(resume.experience[0].description.contains("Built internal tools."));

    assert!(resume.raw_text.contains("Jane Doe"));
}

#[tokio::test]
async fn test_unsupported_mime_type_rejected_before_decoding() {
    let parser = ResumeParser::new().unwrap();
    // Valid DOCX bytes, wrong declared type: the MIME check alone decides.
    let document = RawDocument::new(sample_resume_docx(), "text/plain");

    let result = parser.parse(&document).await;

    match result {
        Err(ResumeParserError::UnsupportedFormat(mime)) => assert_eq!(mime, "text/plain"),
        other => panic!("expected UnsupportedFormat, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_decode_error_propagates() {
    let parser = ResumeParser::new().unwrap();
    let document = RawDocument::new(b"not a zip archive at all".to_vec(), DOCX_MIME);

    let result = parser.parse(&document).await;

    assert!(matches!(result, Err(ResumeParserError::Decode(_))));
}

#[test]
fn test_extractors_are_total_and_idempotent() {
    let contact = ContactExtractor::new();
    let education = EducationExtractor::new();
    let skills = SkillExtractor::new().unwrap();
    let experience = ExperienceExtractor::new();

    let inputs = [
        "",
        "\n\n\n",
        "@@@ ::: ---",
        "EDUCATION EXPERIENCE SKILLS",
        "a single line with no structure whatsoever but plenty of words to scan through",
        "1234567890 2020 Jan Feb (415)",
    ];

    for input in inputs {
        let first = (
            contact.extract(input),
            education.extract(input),
            skills.extract(input),
            experience.extract(input),
        );
        let second = (
            contact.extract(input),
            education.extract(input),
            skills.extract(input),
            experience.extract(input),
        );
        assert_eq!(first, second, "extraction must be pure for {:?}", input);
    }
}

#[tokio::test]
async fn test_input_manager_loads_docx_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample_resume.docx");
    std::fs::write(&path, sample_resume_docx()).unwrap();

    let manager = InputManager::new();
    let document = manager.load_document(&path).await.unwrap();

    assert_eq!(document.mime_type, DOCX_MIME);
    assert_eq!(document.file_name, "sample_resume.docx");
    assert!(!document.bytes.is_empty());

    let parser = ResumeParser::new().unwrap();
    let resume = parser.parse(&document).await.unwrap();
    assert_eq!(resume.contact_info.name, "Jane Doe");
}

#[tokio::test]
async fn test_input_manager_rejects_missing_file() {
    let manager = InputManager::new();
    let result = manager
        .load_document(std::path::Path::new("tests/fixtures/nonexistent.pdf"))
        .await;

    assert!(matches!(result, Err(ResumeParserError::InvalidInput(_))));
}

#[tokio::test]
async fn test_input_manager_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    std::fs::write(&path, "plain text resume").unwrap();

    let manager = InputManager::new();
    let result = manager.load_document(&path).await;

    assert!(matches!(result, Err(ResumeParserError::UnsupportedFormat(_))));
}
