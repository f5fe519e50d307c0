//! Namespace domain types.
//!
//! Namespaces are owned by local storage. Remote collection records refer to
//! them by `name`, which is unique and immutable once referenced.

use serde::{Deserialize, Serialize};

/// A namespace persisted in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Database ID.
    pub id: i64,
    /// Unique, URL-safe name (`[0-9a-z_]+`).
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
    /// Groups that own this namespace.
    pub groups: Vec<String>,
}

/// A namespace to be inserted into local storage (no ID yet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNamespace {
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
    pub groups: Vec<String>,
}

impl NewNamespace {
    /// Create a namespace with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the owning groups.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Set the company display name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}

/// Namespace metadata attached to collection responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceSummary {
    pub id: i64,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
}

impl From<&Namespace> for NamespaceSummary {
    fn from(ns: &Namespace) -> Self {
        Self {
            id: ns.id,
            name: ns.name.clone(),
            company: ns.company.clone(),
            email: ns.email.clone(),
            avatar_url: ns.avatar_url.clone(),
            description: ns.description.clone(),
        }
    }
}
