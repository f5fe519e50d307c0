//! Package store port trait.

use async_trait::async_trait;

use super::error::PackageStoreResult;
use super::types::{UpstreamPage, UpstreamQuery};
use crate::domain::{
    Certification, CertificationUpdate, CollectionRecord, ImportTaskState, VersionSummary,
};

/// Port trait for the remote package store.
///
/// The core never caches what this returns: every read goes upstream.
/// Implementations own timeouts and any retry of idempotent reads;
/// `set_certification` must never be retried.
#[async_trait]
pub trait PackageStorePort: Send + Sync {
    /// List collection versions for the list-collections view.
    async fn list_collections(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<CollectionRecord>>;

    /// List collection versions for the version listing and detail lookups.
    async fn list_collection_versions(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<CollectionRecord>>;

    /// List the `{version, id, created}` projection for a version history.
    async fn list_version_summaries(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<VersionSummary>>;

    /// Change the certification state of one collection version.
    ///
    /// Returns the upstream reply as-is.
    async fn set_certification(
        &self,
        namespace: &str,
        name: &str,
        version: &str,
        certification: Certification,
    ) -> PackageStoreResult<CertificationUpdate>;

    /// Fetch the execution state of an import task.
    async fn get_import_task(&self, task_id: &str) -> PackageStoreResult<ImportTaskState>;
}
