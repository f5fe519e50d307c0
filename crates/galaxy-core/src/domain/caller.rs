//! The identity a request is made on behalf of.

use serde::{Deserialize, Serialize};

/// An authenticated caller, as asserted by the fronting proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub username: String,
    pub groups: Vec<String>,
}

impl Caller {
    /// Create a caller with the given group memberships.
    pub fn new<I, S>(username: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the caller belongs to `group`.
    #[must_use]
    pub fn is_member_of(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Whether the caller belongs to any of `groups`.
    #[must_use]
    pub fn shares_group_with(&self, groups: &[String]) -> bool {
        groups.iter().any(|g| self.is_member_of(g))
    }
}

/// What the current-user endpoint reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub username: String,
    pub groups: Vec<String>,
    pub is_partner_engineer: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_membership() {
        let caller = Caller::new("alice", ["rh-identity-account:1", "dev"]);
        assert!(caller.is_member_of("dev"));
        assert!(!caller.is_member_of("ops"));
        assert!(caller.shares_group_with(&["ops".to_string(), "dev".to_string()]));
        assert!(!caller.shares_group_with(&[]));
    }
}
