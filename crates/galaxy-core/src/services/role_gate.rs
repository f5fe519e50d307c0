//! Role-based visibility gate.

use std::sync::Arc;

use crate::domain::{Caller, Certification, Namespace};
use crate::ports::{Authorizer, CoreError, UpstreamQuery, params};

/// Which collection versions a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Every certification state.
    All,
    /// Only `certified` versions.
    CertifiedOnly,
}

impl Visibility {
    /// Constrain an upstream query to what this visibility allows.
    ///
    /// `CertifiedOnly` forces `certification=certified`; `All` leaves the
    /// query untouched.
    pub fn apply(self, query: &mut UpstreamQuery) {
        if self == Self::CertifiedOnly {
            query.set(params::CERTIFICATION, Certification::Certified.as_str());
        }
    }
}

/// Classifies callers as privileged or regular.
///
/// Stateless wrapper over an [`Authorizer`]; a failed check is fatal for the
/// request and never retried.
#[derive(Clone)]
pub struct RoleGate {
    authorizer: Arc<dyn Authorizer>,
}

impl RoleGate {
    pub fn new(authorizer: Arc<dyn Authorizer>) -> Self {
        Self { authorizer }
    }

    pub async fn is_privileged(&self, caller: &Caller) -> Result<bool, CoreError> {
        Ok(self.authorizer.is_privileged(caller).await?)
    }

    pub async fn visibility(&self, caller: &Caller) -> Result<Visibility, CoreError> {
        if self.is_privileged(caller).await? {
            Ok(Visibility::All)
        } else {
            Ok(Visibility::CertifiedOnly)
        }
    }

    /// Require the privileged role, failing with `PermissionDenied`.
    pub async fn require_privileged(&self, caller: &Caller, action: &str) -> Result<(), CoreError> {
        if self.is_privileged(caller).await? {
            Ok(())
        } else {
            Err(CoreError::PermissionDenied(format!(
                "user must be a partner engineer to {action}"
            )))
        }
    }

    /// Object-level check against the owning namespace.
    pub async fn require_namespace_access(
        &self,
        caller: &Caller,
        namespace: &Namespace,
    ) -> Result<(), CoreError> {
        if self
            .authorizer
            .can_manage_namespace(caller, namespace)
            .await?
        {
            Ok(())
        } else {
            Err(CoreError::PermissionDenied(format!(
                "user may not manage namespace '{}'",
                namespace.name
            )))
        }
    }
}
