//! Import task domain types.
//!
//! A `CollectionImport` is the local ownership record for a submitted
//! import. Its execution state (`ImportTaskState`) lives in the package
//! store and is re-fetched on every read.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Local Records
// ─────────────────────────────────────────────────────────────────────────────

/// A persisted import ownership record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionImport {
    /// Remote task identifier.
    pub task_id: String,
    /// Namespace name.
    pub namespace: String,
    pub name: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
}

/// An import record to be inserted into local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCollectionImport {
    pub task_id: String,
    pub namespace: String,
    pub name: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Remote Task State
// ─────────────────────────────────────────────────────────────────────────────

/// Execution state of a remote import task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportState {
    Waiting,
    Running,
    Completed,
    Failed,
}

impl ImportState {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "waiting" => Some(Self::Waiting),
            "running" => Some(Self::Running),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Whether the task has stopped running.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for ImportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure details reported by a failed import task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportError {
    pub code: Option<String>,
    pub description: Option<String>,
    pub traceback: Option<String>,
}

/// One log line emitted by the importer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMessage {
    pub level: String,
    pub message: String,
    pub time: DateTime<Utc>,
}

/// Remote execution state of an import task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTaskState {
    pub id: String,
    pub state: ImportState,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub error: Option<ImportError>,
    /// Messages in emission order.
    pub messages: Vec<ImportMessage>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Merged Views
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of an import list page.
///
/// When the remote state could not be fetched the entry is `degraded`: the
/// local fields are present, `state` is `None` and `unavailable_reason`
/// describes the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportTaskSummary {
    pub id: String,
    pub namespace: String,
    pub name: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub state: Option<ImportState>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub error: Option<ImportError>,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<String>,
}

impl ImportTaskSummary {
    /// Merge a local record with its remote state.
    #[must_use]
    pub fn merged(record: CollectionImport, state: ImportTaskState) -> Self {
        Self {
            id: record.task_id,
            namespace: record.namespace,
            name: record.name,
            version: record.version,
            created_at: record.created_at,
            state: Some(state.state),
            started_at: state.started_at,
            finished_at: state.finished_at,
            error: state.error,
            degraded: false,
            unavailable_reason: None,
        }
    }

    /// Build an entry for a record whose remote state is unavailable.
    #[must_use]
    pub fn degraded(record: CollectionImport, reason: impl Into<String>) -> Self {
        Self {
            id: record.task_id,
            namespace: record.namespace,
            name: record.name,
            version: record.version,
            created_at: record.created_at,
            state: None,
            started_at: None,
            finished_at: None,
            error: None,
            degraded: true,
            unavailable_reason: Some(reason.into()),
        }
    }
}

/// Full detail of a single import, including importer messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportTaskDetail {
    pub id: String,
    pub namespace: String,
    pub name: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub state: ImportState,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub error: Option<ImportError>,
    pub messages: Vec<ImportMessage>,
}

impl ImportTaskDetail {
    #[must_use]
    pub fn merged(record: CollectionImport, state: ImportTaskState) -> Self {
        Self {
            id: record.task_id,
            namespace: record.namespace,
            name: record.name,
            version: record.version,
            created_at: record.created_at,
            state: state.state,
            started_at: state.started_at,
            finished_at: state.finished_at,
            error: state.error,
            messages: state.messages,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Query Types
// ─────────────────────────────────────────────────────────────────────────────

/// Sort order for import listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportSort {
    /// Oldest first.
    #[default]
    CreatedAsc,
    /// Newest first.
    CreatedDesc,
}

impl ImportSort {
    /// Parse the public `sort` value (`created` or `-created`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "created" => Some(Self::CreatedAsc),
            "-created" => Some(Self::CreatedDesc),
            _ => None,
        }
    }
}

/// Filters applied to the local import listing. All fields are exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportFilter {
    pub namespace: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    /// Calendar day (UTC) the import was created on.
    pub created: Option<NaiveDate>,
    pub sort: ImportSort,
}

/// Which imports a caller may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportScope {
    /// Every import.
    All,
    /// Imports whose namespace is owned by one of these groups.
    OwnedBy(Vec<String>),
}
