//! Resume format detection

use crate::error::{Result, ScreenerError};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            other => Err(ScreenerError::UnsupportedFormat(format!(".{}", other))),
        }
    }

    /// Detect from a file name such as `resume.PDF`.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ScreenerError::UnsupportedFormat(format!("File has no extension: {}", filename))
            })?;

        Self::from_extension(extension)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert_eq!(DocumentFormat::from_filename("cv.pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("CV.DOCX").unwrap(), DocumentFormat::Docx);
        assert_eq!(
            DocumentFormat::from_filename("/tmp/uploads/jane.doe.docx").unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_unsupported_extensions() {
        for name in ["resume.txt", "resume.doc", "resume", "resume.md"] {
            assert!(matches!(
                DocumentFormat::from_filename(name),
                Err(ScreenerError::UnsupportedFormat(_))
            ));
        }
    }
}
