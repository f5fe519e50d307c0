//! Authorization port.
//!
//! Decides whether a caller holds the privileged (partner-engineer) role and
//! whether they may act on a given namespace.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Caller, Namespace};

/// The authorization check itself could not be evaluated.
#[derive(Debug, Error)]
#[error("Authorization check failed: {0}")]
pub struct AuthorizationError(pub String);

/// External authorization decision.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Whether the caller may see non-certified content and change
    /// certification state.
    async fn is_privileged(&self, caller: &Caller) -> Result<bool, AuthorizationError>;

    /// Object-level check: whether the caller may act on `namespace`.
    async fn can_manage_namespace(
        &self,
        caller: &Caller,
        namespace: &Namespace,
    ) -> Result<bool, AuthorizationError>;
}
