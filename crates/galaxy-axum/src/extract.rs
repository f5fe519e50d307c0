//! Caller identity extraction.
//!
//! Authentication happens in the proxy in front of this service, which
//! asserts the user in `x-galaxy-username` and their groups, comma
//! separated, in `x-galaxy-groups`.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use galaxy_core::Caller;

use crate::error::HttpError;

pub const USERNAME_HEADER: &str = "x-galaxy-username";
pub const GROUPS_HEADER: &str = "x-galaxy-groups";

/// The authenticated caller of a request.
#[derive(Debug, Clone)]
pub struct Identity(pub Caller);

impl Identity {
    /// Read the identity headers. A missing or blank username is rejected.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, HttpError> {
        let username = headers
            .get(USERNAME_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                HttpError::Unauthorized(format!("missing {USERNAME_HEADER} header"))
            })?;

        let groups = headers
            .get(GROUPS_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Ok(Self(Caller::new(username, groups)))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Identity {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
    }
}
