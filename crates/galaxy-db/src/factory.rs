//! Composition utilities for wiring `SQLite` repositories into the core.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use galaxy_core::Repos;

use crate::repositories::{SqliteImportRepository, SqliteNamespaceRepository};

/// Factory for repository instances backed by one `SQLite` pool.
pub struct StoreFactory;

impl StoreFactory {
    /// Build all repositories from a pool.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let core = ApiCore::new(StoreFactory::build_repos(&pool), store, authorizer, &config);
    /// ```
    pub fn build_repos(pool: &SqlitePool) -> Repos {
        Repos::new(
            Self::namespace_repository(pool.clone()),
            Self::import_repository(pool.clone()),
        )
    }

    /// Create a namespace repository from a pool.
    pub fn namespace_repository(pool: SqlitePool) -> Arc<SqliteNamespaceRepository> {
        Arc::new(SqliteNamespaceRepository::new(pool))
    }

    /// Create an import repository from a pool.
    pub fn import_repository(pool: SqlitePool) -> Arc<SqliteImportRepository> {
        Arc::new(SqliteImportRepository::new(pool))
    }
}

/// In-memory database with the production schema, for tests in this and
/// downstream crates.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a fresh in-memory database.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repositories over this database.
    pub fn repos(&self) -> Repos {
        StoreFactory::build_repos(&self.pool)
    }
}
