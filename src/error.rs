//! Error types for loading and animating the artist feed.

use thiserror::Error;

/// Main error type for all feed and animation operations.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed before a response arrived.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
        /// URL that was requested.
        url: String,
    },

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration values are out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
