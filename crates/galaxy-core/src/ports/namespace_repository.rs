//! Namespace repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Namespace, NewNamespace};

/// Repository for locally owned namespaces.
///
/// Namespaces are created by management flows outside this service; the
/// gateway only reads them. `insert` exists for seeding.
#[async_trait]
pub trait NamespaceRepository: Send + Sync {
    /// Get a namespace by its unique name.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no namespace has that name.
    async fn get_by_name(&self, name: &str) -> Result<Namespace, RepositoryError>;

    /// Get every namespace whose name is in `names`, in one lookup.
    ///
    /// Unknown names are skipped, not reported as errors.
    async fn get_by_names(&self, names: &[String]) -> Result<Vec<Namespace>, RepositoryError>;

    /// List all namespaces ordered by name.
    async fn list(&self) -> Result<Vec<Namespace>, RepositoryError>;

    /// Insert a namespace and its owning groups.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the name is taken.
    async fn insert(&self, namespace: &NewNamespace) -> Result<Namespace, RepositoryError>;
}
