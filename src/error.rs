//! Error types for reply extraction

use thiserror::Error;

/// Errors that can occur during reply extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input document was empty or missing
    #[error("Empty HTML input")]
    EmptyInput,

    /// Unexpected failure inside a pipeline stage
    #[error("Processing failed in {stage}: {details}")]
    Processing { stage: String, details: String },
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
