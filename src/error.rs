//! Error types for trenlog

use thiserror::Error;

/// Main error type for the trenlog application
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
