//! Internal API response types for the Pulp REST API.
//!
//! These types are internal to `galaxy-pulp` and are not exposed to consumers.
//! External consumers should use the domain types defined in `galaxy-core`.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Pulp client.
#[derive(Debug, Clone)]
pub struct PulpConfig {
    /// Base URL of the Pulp server
    pub base_url: Url,
    /// Normalised Galaxy API prefix, always `/.../`
    pub api_prefix: String,
    /// Optional HTTP basic credentials
    pub credentials: Option<BasicCredentials>,
    /// Maximum number of retry attempts for idempotent requests
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff
    pub retry_base_delay_ms: u64,
}

/// HTTP basic credentials.
#[derive(Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: Option<String>,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Ensure a prefix starts and ends with exactly one `/`.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

// ============================================================================
// Listing Responses
// ============================================================================

/// Paginated list response.
#[derive(Debug, Clone, Deserialize)]
pub struct PulpPage<T> {
    pub count: u64,
    /// Link to the following page, if any
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<T>,
}

/// A tag as reported upstream: either a bare name or `{ "name": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PulpTag {
    Name(String),
    Object { name: String },
}

impl PulpTag {
    pub fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Object { name } => name,
        }
    }
}

/// A content item inside a collection version.
#[derive(Debug, Clone, Deserialize)]
pub struct PulpContent {
    pub name: String,
    pub content_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Descriptive metadata of a collection version.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PulpMetadata {
    pub description: Option<String>,
    pub tags: Vec<PulpTag>,
    pub authors: Vec<String>,
    pub license: Vec<String>,
    pub homepage: Option<String>,
    pub documentation: Option<String>,
    pub issues: Option<String>,
    pub repository: Option<String>,
    pub contents: Vec<PulpContent>,
    pub dependencies: BTreeMap<String, String>,
}

/// Uploaded artifact reference.
#[derive(Debug, Clone, Deserialize)]
pub struct PulpArtifact {
    pub filename: String,
    #[serde(default)]
    pub sha256: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// A collection version record. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PulpCollectionVersion {
    pub id: String,
    pub namespace: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub is_highest: bool,
    pub certification: String,
    pub pulp_created: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<PulpMetadata>,
    #[serde(default)]
    pub docs_blob: Option<serde_json::Value>,
    #[serde(default)]
    pub artifact: Option<PulpArtifact>,
}

/// The `version,id,pulp_created` projection.
#[derive(Debug, Clone, Deserialize)]
pub struct PulpVersionSummary {
    pub id: String,
    pub version: String,
    pub pulp_created: DateTime<Utc>,
}

/// Body of a certification change.
#[derive(Debug, Clone, Serialize)]
pub struct CertificationInfo<'a> {
    pub certification: &'a str,
}

// ============================================================================
// Import Tasks
// ============================================================================

/// Importer timestamps come either as RFC 3339 strings or epoch seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PulpTimestamp {
    Rfc3339(DateTime<Utc>),
    Epoch(f64),
}

impl PulpTimestamp {
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Rfc3339(dt) => Some(*dt),
            Self::Epoch(secs) => {
                let millis = (secs * 1000.0).round() as i64;
                Utc.timestamp_millis_opt(millis).single()
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PulpImportError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub traceback: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PulpImportMessage {
    pub level: String,
    pub message: String,
    pub time: PulpTimestamp,
}

/// Import task as reported by the Galaxy plugin.
#[derive(Debug, Clone, Deserialize)]
pub struct PulpImportTask {
    pub id: String,
    pub state: String,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error: Option<PulpImportError>,
    #[serde(default)]
    pub messages: Vec<PulpImportMessage>,
}
