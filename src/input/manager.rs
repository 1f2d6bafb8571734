//! Input manager for resume uploads

use crate::error::{Result, ScreenerError};
use crate::input::file_detector::DocumentFormat;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::{info, warn};
use std::path::Path;
use tokio::fs;

/// A resume as received: original file name plus raw bytes.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Ok(Self::new(filename, bytes))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Lowercased plain text of the upload.
    ///
    /// Decoding runs on the blocking pool; a decoder panic is reported as
    /// `ExtractionFailed`. Text that is empty or only whitespace is `EmptyDocument`.
    pub async fn extract_text(&self, upload: ResumeUpload) -> Result<String> {
        let format = DocumentFormat::from_filename(&upload.filename)?;
        info!("Extracting text from {} resume: {}", format, upload.filename);

        let ResumeUpload { filename, bytes } = upload;
        let decoded = tokio::task::spawn_blocking(move || match format {
            DocumentFormat::Pdf => PdfExtractor.extract(&bytes),
            DocumentFormat::Docx => DocxExtractor::new().extract(&bytes),
        })
        .await
        .map_err(|e| ScreenerError::extraction(format!("Decoder aborted: {}", e)))
        .and_then(|result| result);

        let text = match decoded {
            Ok(text) => text.to_lowercase(),
            Err(e) => {
                warn!("Error reading {} {}: {}", format, filename, e);
                return Err(e);
            }
        };

        if text.trim().is_empty() {
            warn!("No text extracted from {}", filename);
            return Err(ScreenerError::EmptyDocument);
        }

        Ok(text)
    }
}
