//! Group-membership based authorizer.

use async_trait::async_trait;

use crate::config::DEFAULT_PRIVILEGED_GROUP;
use crate::domain::{Caller, Namespace};
use crate::ports::{AuthorizationError, Authorizer};

/// Authorizer backed purely by the caller's asserted groups.
///
/// A caller is privileged iff they belong to `privileged_group`, and may
/// manage a namespace iff privileged or a member of one of its owning groups.
#[derive(Debug, Clone)]
pub struct GroupAuthorizer {
    privileged_group: String,
}

impl GroupAuthorizer {
    pub fn new(privileged_group: impl Into<String>) -> Self {
        Self {
            privileged_group: privileged_group.into(),
        }
    }
}

impl Default for GroupAuthorizer {
    fn default() -> Self {
        Self::new(DEFAULT_PRIVILEGED_GROUP)
    }
}

#[async_trait]
impl Authorizer for GroupAuthorizer {
    async fn is_privileged(&self, caller: &Caller) -> Result<bool, AuthorizationError> {
        Ok(caller.is_member_of(&self.privileged_group))
    }

    async fn can_manage_namespace(
        &self,
        caller: &Caller,
        namespace: &Namespace,
    ) -> Result<bool, AuthorizationError> {
        Ok(caller.is_member_of(&self.privileged_group)
            || caller.shares_group_with(&namespace.groups))
    }
}
