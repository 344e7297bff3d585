//! File type detection

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Unknown,
}

impl FileType {
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            PDF_MIME => FileType::Pdf,
            DOCX_MIME => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            FileType::Pdf => Some(PDF_MIME),
            FileType::Docx => Some(DOCX_MIME),
            FileType::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime() {
        assert_eq!(FileType::from_mime("application/pdf"), FileType::Pdf);
        assert_eq!(FileType::from_mime(DOCX_MIME), FileType::Docx);
        assert_eq!(FileType::from_mime("text/plain"), FileType::Unknown);
        assert_eq!(FileType::from_mime(""), FileType::Unknown);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("pdf"), FileType::Pdf);
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("docx"), FileType::Docx);
        assert_eq!(FileType::from_extension("txt"), FileType::Unknown);
    }

    #[test]
    fn test_mime_round_trip() {
        assert_eq!(FileType::from_mime(FileType::Pdf.mime_type().unwrap()), FileType::Pdf);
        assert_eq!(FileType::from_mime(FileType::Docx.mime_type().unwrap()), FileType::Docx);
        assert!(FileType::Unknown.mime_type().is_none());
    }
}
