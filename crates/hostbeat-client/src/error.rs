//! Error types for the hostbeat client

use thiserror::Error;

/// Errors that can occur when talking to the collector
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed to connect or complete
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Collector answered with a status other than 200
    #[error("collector returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid collector URL
    #[error("invalid collector URL: {0}")]
    Url(#[from] url::ParseError),
}
