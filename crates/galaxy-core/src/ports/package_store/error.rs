//! Error types for package store port operations.

use thiserror::Error;

/// Errors from package store operations.
///
/// Transport-specific errors (HTTP status, JSON decoding) are mapped to
/// these by the adapter.
#[derive(Debug, Error)]
pub enum PackageStoreError {
    /// The addressed resource does not exist upstream.
    #[error("Not found upstream: {resource}")]
    NotFound {
        /// Path or identifier that wasn't found
        resource: String,
    },

    /// The upstream call did not complete within the configured timeout.
    #[error("Package store timed out")]
    Timeout,

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The package store answered with a body that could not be understood.
    #[error("Invalid package store response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The package store refused the request.
    #[error("Package store rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code returned upstream
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Client configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for package store operations.
pub type PackageStoreResult<T> = Result<T, PackageStoreError>;
