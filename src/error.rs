//! Error types for source inspection

use thiserror::Error;

/// Errors that end an inspection
///
/// Every variant is terminal: the caller receives either a complete
/// [`AnalysisResult`](crate::AnalysisResult) or one of these, never both.
/// The display strings are what lands in the `error` field of the output.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The given path did not exist when checked
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Reading, decoding or stat-ing the file failed
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Any other failure while producing the record
    #[error("{message}")]
    ProcessingFailure { message: String },
}

impl From<serde_json::Error> for InspectError {
    fn from(e: serde_json::Error) -> Self {
        Self::ProcessingFailure {
            message: e.to_string(),
        }
    }
}

/// Result type alias for inspection operations
pub type Result<T> = std::result::Result<T, InspectError>;
