//! Error handling for the resume screener

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {cause}")]
    ExtractionFailed { cause: String },

    #[error("Document contains no readable text")]
    EmptyDocument,

    #[error("Embedding model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

/// Which side of the request boundary an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClass {
    /// Bad input from the caller (400-class)
    Client,
    /// Failure on our side (500-class)
    Server,
}

impl ScreenerError {
    pub fn extraction(cause: impl ToString) -> Self {
        ScreenerError::ExtractionFailed {
            cause: cause.to_string(),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            ScreenerError::UnsupportedFormat(_)
            | ScreenerError::ExtractionFailed { .. }
            | ScreenerError::EmptyDocument
            | ScreenerError::InvalidInput(_) => ErrorClass::Client,
            _ => ErrorClass::Server,
        }
    }

    /// Caller-facing message. Underlying causes stay in `Display` for the logs.
    pub fn detail(&self) -> String {
        match self {
            ScreenerError::UnsupportedFormat(_) => {
                "Error parsing resume: Unsupported file type".to_string()
            }
            ScreenerError::ExtractionFailed { .. } => {
                "Error parsing resume: Document could not be read".to_string()
            }
            ScreenerError::EmptyDocument => {
                "Error parsing resume: Could not read text from file".to_string()
            }
            ScreenerError::InvalidInput(msg) => format!("Invalid input: {}", msg),
            ScreenerError::ModelUnavailable(_) => {
                "ML Model is not loaded. Cannot process request.".to_string()
            }
            ScreenerError::Configuration(_) => "Service is misconfigured".to_string(),
            _ => "An unexpected error occurred".to_string(),
        }
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self.class() {
            ErrorClass::Client => 2,
            ErrorClass::Server => 1,
        }
    }
}

/// Structured failure returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub class: ErrorClass,
}

impl From<&ScreenerError> for ErrorResponse {
    fn from(err: &ScreenerError) -> Self {
        ErrorResponse {
            detail: err.detail(),
            class: err.class(),
        }
    }
}

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ScreenerError::Internal(err.to_string())
    }
}

impl From<toml::de::Error> for ScreenerError {
    fn from(err: toml::de::Error) -> Self {
        ScreenerError::Configuration(format!("Failed to parse config: {}", err))
    }
}
