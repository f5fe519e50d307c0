//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` and its nested port errors to HTTP status codes and
//! JSON bodies of the form `{"error": "...", "status": 404}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use galaxy_core::{CoreError, PackageStoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No caller identity on the request.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller may not perform this operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The package store failed or answered inconsistently.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// The package store did not answer in time.
    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }

        let message = match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::Conflict(msg)
            | Self::BadGateway(msg)
            | Self::GatewayTimeout(msg)
            | Self::Internal(msg) => msg,
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::PermissionDenied(msg) => Self::Forbidden(msg),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Upstream(store_err) => store_err.into(),
            CoreError::Inconsistent(msg) => Self::BadGateway(msg),
            CoreError::Authorization(e) => Self::Internal(format!("Authorization: {e}")),
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Configuration(msg) => Self::Internal(format!("Config: {msg}")),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<PackageStoreError> for HttpError {
    fn from(err: PackageStoreError) -> Self {
        match err {
            PackageStoreError::NotFound { resource } => Self::NotFound(resource),
            PackageStoreError::Timeout => Self::GatewayTimeout(err.to_string()),
            PackageStoreError::Configuration { message } => {
                Self::Internal(format!("Package store config: {message}"))
            }
            PackageStoreError::Network { .. }
            | PackageStoreError::InvalidResponse { .. }
            | PackageStoreError::Rejected { .. } => Self::BadGateway(err.to_string()),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => Self::Conflict(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::AuthorizationError;

    fn status_of(err: CoreError) -> StatusCode {
        HttpError::from(err).status()
    }

    #[test]
    fn test_core_error_statuses() {
        assert_eq!(status_of(CoreError::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(CoreError::PermissionDenied("x".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(CoreError::Validation("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::Inconsistent("x".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(CoreError::Authorization(AuthorizationError("x".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_error_statuses() {
        assert_eq!(
            status_of(CoreError::Upstream(PackageStoreError::Timeout)),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_of(CoreError::Upstream(PackageStoreError::NotFound {
                resource: "task".into()
            })),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CoreError::Upstream(PackageStoreError::Rejected {
                status: 400,
                message: "nope".into()
            })),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_repository_errors() {
        assert_eq!(
            status_of(CoreError::Repository(RepositoryError::NotFound("x".into()))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CoreError::Repository(RepositoryError::Storage("x".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
