//! Internal error types for Pulp operations.
//!
//! These errors are internal to `galaxy-pulp` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for Pulp operations.
pub type PulpResult<T> = Result<T, PulpError>;

/// Errors related to Pulp API operations.
#[derive(Debug, Error)]
pub enum PulpError {
    /// API request failed with an HTTP error status.
    #[error("Pulp API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Response body, if any
        body: String,
    },

    /// The addressed resource does not exist.
    #[error("Not found on Pulp: {url}")]
    NotFound {
        /// The URL that was requested
        url: String,
    },

    /// The request did not complete within the client timeout.
    #[error("Pulp request timed out: {url}")]
    Timeout {
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Pulp API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
