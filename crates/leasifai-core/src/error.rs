//! Error types for leasifai-core.

use thiserror::Error;

/// Result type alias using leasifai-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for orchestration operations
#[derive(Error, Debug)]
pub enum Error {
    // Request validation errors
    #[error("No messages provided")]
    EmptyConversation,

    #[error("Missing property or business details")]
    MissingDetails,

    // Provider errors
    #[error("Provider error: {0}")]
    Provider(String),

    // Model output errors
    #[error("Failed to parse model output: {0}")]
    Parse(#[from] serde_json::Error),
}
