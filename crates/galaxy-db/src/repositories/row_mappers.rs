//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use galaxy_core::{CollectionImport, Namespace, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for namespace queries.
pub const NAMESPACE_SELECT_COLUMNS: &str = "id, name, company, email, avatar_url, description";

/// Shared SELECT column list for import queries.
pub const IMPORT_SELECT_COLUMNS: &str = "task_id, namespace, name, version, created_at";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Render a timestamp the way it is stored.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Parse a stored timestamp, tolerating a trailing ` UTC`.
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let trimmed = raw.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp {raw:?}: {e}")))
}

pub fn storage_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Map an insert failure, reporting unique-key collisions as `AlreadyExists`.
pub fn insert_error(e: sqlx::Error, what: &str) -> RepositoryError {
    match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            RepositoryError::AlreadyExists(what.to_string())
        }
        other => storage_error(other),
    }
}

/// Parse a namespace row. Groups are loaded separately.
pub fn row_to_namespace(row: &SqliteRow) -> Result<Namespace, RepositoryError> {
    Ok(Namespace {
        id: row.try_get("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        company: row.try_get("company").map_err(storage_error)?,
        email: row.try_get("email").map_err(storage_error)?,
        avatar_url: row.try_get("avatar_url").map_err(storage_error)?,
        description: row.try_get("description").map_err(storage_error)?,
        groups: Vec::new(),
    })
}

pub fn row_to_import(row: &SqliteRow) -> Result<CollectionImport, RepositoryError> {
    let created_at: String = row.try_get("created_at").map_err(storage_error)?;

    Ok(CollectionImport {
        task_id: row.try_get("task_id").map_err(storage_error)?,
        namespace: row.try_get("namespace").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        version: row.try_get("version").map_err(storage_error)?,
        created_at: parse_datetime(&created_at)?,
    })
}
