//! Collection domain types.
//!
//! These types describe collection version records owned by the package
//! store, and the enriched views the API returns for them. Records are
//! always fetched fresh from upstream and never persisted locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::namespace::NamespaceSummary;

// ─────────────────────────────────────────────────────────────────────────────
// Certification
// ─────────────────────────────────────────────────────────────────────────────

/// Certification state of a collection version.
///
/// Controls default visibility: regular callers only ever see
/// `Certified` content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Certification {
    Certified,
    NotCertified,
    NeedsReview,
}

impl Certification {
    /// All recognized certification states.
    pub const ALL: [Self; 3] = [Self::Certified, Self::NotCertified, Self::NeedsReview];

    /// Parse a certification state from its wire value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "certified" => Some(Self::Certified),
            "not_certified" => Some(Self::NotCertified),
            "needs_review" => Some(Self::NeedsReview),
            _ => None,
        }
    }

    /// Wire value of this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Certified => "certified",
            Self::NotCertified => "not_certified",
            Self::NeedsReview => "needs_review",
        }
    }
}

impl fmt::Display for Certification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Collection Records
// ─────────────────────────────────────────────────────────────────────────────

/// A content item shipped inside a collection version (module, role, plugin).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub name: String,
    pub content_type: String,
    pub description: Option<String>,
}

/// Descriptive metadata of a collection version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionMetadata {
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
    pub license: Vec<String>,
    pub homepage: Option<String>,
    pub documentation: Option<String>,
    pub issues: Option<String>,
    pub repository: Option<String>,
    pub contents: Vec<ContentItem>,
    /// Dependency name -> version range.
    pub dependencies: BTreeMap<String, String>,
}

/// Reference to the uploaded collection artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub filename: String,
    pub sha256: Option<String>,
    pub size: Option<u64>,
}

/// A collection version as reported by the package store.
///
/// `(namespace, name, version)` is unique upstream, and exactly one record
/// per `(namespace, name)` carries `is_highest = true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRecord {
    /// Upstream identifier.
    pub id: String,
    /// Namespace name (joined to local namespaces by name, not by ID).
    pub namespace: String,
    pub name: String,
    /// Semantic version string.
    pub version: String,
    pub is_highest: bool,
    pub certification: Certification,
    /// When the package store created this version.
    pub pulp_created: DateTime<Utc>,
    pub metadata: CollectionMetadata,
    /// Rendered documentation. Excluded from list projections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_blob: Option<serde_json::Value>,
    pub artifact: Option<ArtifactRef>,
}

/// Upstream reply to a certification change, passed through untouched.
///
/// The change is already applied when the reply arrives, so its shape is
/// not held to the listing record schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificationUpdate(pub serde_json::Value);

impl CertificationUpdate {
    /// The certification the store reports back, if the reply carries one.
    #[must_use]
    pub fn certification(&self) -> Option<&str> {
        self.0.get("certification").and_then(serde_json::Value::as_str)
    }
}

/// Minimal projection of a version, used for version-history summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSummary {
    pub id: String,
    pub version: String,
    pub created: DateTime<Utc>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Enriched Views
// ─────────────────────────────────────────────────────────────────────────────

/// A collection in a list page: its highest version plus namespace metadata.
///
/// `namespace` is `None` when the namespace is not known locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionSummary {
    pub id: String,
    pub name: String,
    pub namespace: Option<NamespaceSummary>,
    pub latest_version: CollectionRecord,
}

impl CollectionSummary {
    /// Build a list entry from an upstream record and optional namespace.
    #[must_use]
    pub fn new(record: CollectionRecord, namespace: Option<NamespaceSummary>) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            namespace,
            latest_version: record,
        }
    }
}

/// Full detail of a single collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionDetail {
    pub id: String,
    pub name: String,
    pub namespace: NamespaceSummary,
    /// The requested version, or the highest one when none was requested.
    pub latest_version: CollectionRecord,
    pub all_versions: Vec<VersionSummary>,
}
