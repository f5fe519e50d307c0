//! Import repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{CollectionImport, ImportFilter, ImportScope, NewCollectionImport, PageRequest};

/// Repository for import ownership records.
///
/// Every read is restricted to an [`ImportScope`]; a record outside the
/// scope behaves exactly like a missing one.
#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// Get one import by remote task ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the task is unknown or out
    /// of scope.
    async fn get(
        &self,
        task_id: &str,
        scope: &ImportScope,
    ) -> Result<CollectionImport, RepositoryError>;

    /// List a filtered, sorted page of imports.
    ///
    /// Returns the page items and the total number of matching records.
    async fn list(
        &self,
        filter: &ImportFilter,
        scope: &ImportScope,
        page: PageRequest,
    ) -> Result<(Vec<CollectionImport>, u64), RepositoryError>;

    /// Record a newly submitted import.
    async fn insert(&self, import: &NewCollectionImport)
    -> Result<CollectionImport, RepositoryError>;
}
