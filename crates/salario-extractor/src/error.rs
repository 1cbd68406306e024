//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur around extraction
///
/// Classification itself never fails; these cover configuration and the
/// documents read and written around a run.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Candidate pattern could not be compiled
    #[error("Invalid candidate pattern: {0}")]
    Pattern(String),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::Pattern(e.to_string())
    }
}
