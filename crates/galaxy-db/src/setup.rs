//! Database setup and initialization.
//!
//! Entry points call [`setup_database`] with the resolved database path.

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;

/// Open (or create) the `SQLite` database and ensure the schema exists.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the file
/// cannot be opened, or schema creation fails.
///
/// # Example
///
/// ```rust,no_run
/// use galaxy_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/galaxy/galaxy.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;
    tracing::debug!(path = %db_path.display(), "Database ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePool::connect("sqlite::memory:").await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates every table and index. Safe to call repeatedly.
pub(crate) async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS namespaces (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            company TEXT,
            email TEXT,
            avatar_url TEXT,
            description TEXT
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS namespace_groups (
            namespace_id INTEGER NOT NULL,
            group_name TEXT NOT NULL,
            PRIMARY KEY (namespace_id, group_name),
            FOREIGN KEY (namespace_id) REFERENCES namespaces(id) ON DELETE CASCADE
        )
        ",
    )
    .execute(pool)
    .await?;

    // Scope checks look namespaces up by group
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_namespace_groups_group ON namespace_groups(group_name)",
    )
    .execute(pool)
    .await?;

    // created_at is stored as `%Y-%m-%d %H:%M:%S%.6f` UTC so text order is time order
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS collection_imports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id TEXT NOT NULL UNIQUE,
            namespace TEXT NOT NULL,
            name TEXT NOT NULL,
            version TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_collection_imports_namespace ON collection_imports(namespace)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_collection_imports_created ON collection_imports(created_at)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
