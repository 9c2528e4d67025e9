//! Error types for the supernote-cloud library.

use thiserror::Error;

/// Main error type for supernote-cloud operations.
///
/// Only transport and local failures end up here. Rejections reported by the
/// service itself (wrong password, failed upload slot) arrive as falsy fields
/// in an otherwise valid response and are returned in-band.
#[derive(Error, Debug)]
pub enum CloudError {
    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Local file could not be read.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Local path has no usable file name.
    #[error("Invalid file path: {0}")]
    InvalidPath(String),

    /// Client could not be configured.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for supernote-cloud operations.
pub type Result<T> = std::result::Result<T, CloudError>;
