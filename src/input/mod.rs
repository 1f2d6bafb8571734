//! Input processing module
//! Handles format detection, text extraction, and upload handling

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::{InputManager, ResumeUpload};
