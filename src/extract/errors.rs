//! Error types for text extraction
//!
//! Every variant is a failed extraction: the caller shows
//! [`ExtractionError::user_message`] and nothing is committed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// File type the extractor does not accept
    #[error("unsupported file type: {0}")]
    UnsupportedMimeType(String),

    /// Input could not be decoded
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The extraction service failed or could not be reached
    #[error("extraction service failed: {0}")]
    Upstream(String),

    /// Extraction finished without any text
    #[error("no text could be extracted")]
    EmptyResult,
}

impl ExtractionError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractionError::UnsupportedMimeType(_) => "Please choose a valid PDF file.",
            ExtractionError::MalformedInput(_)
            | ExtractionError::Upstream(_)
            | ExtractionError::EmptyResult => "The PDF could not be read. Please try again.",
        }
    }
}
