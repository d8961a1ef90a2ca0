//! Error types for the sketch pad

use thiserror::Error;

/// Result type alias for pad operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the sketch pad
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The classifier backend could not produce a usable prediction.
    /// Transport failures, non-success statuses, and malformed responses
    /// all collapse into this variant; the message keeps the detail.
    #[error("Prediction unavailable: {0}")]
    PredictionUnavailable(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
