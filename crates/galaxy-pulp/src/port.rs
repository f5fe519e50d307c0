//! Port trait implementation for `PulpClient`.
//!
//! This module implements the core-owned `PackageStorePort` trait for
//! `PulpClient`, converting between Pulp wire types and domain records.

use async_trait::async_trait;
use galaxy_core::domain::{
    ArtifactRef, Certification, CertificationUpdate, CollectionMetadata, CollectionRecord,
    ContentItem, ImportError, ImportMessage, ImportState, ImportTaskState, VersionSummary,
};
use galaxy_core::ports::{
    PackageStoreError, PackageStorePort, PackageStoreResult, UpstreamPage, UpstreamQuery,
};

use crate::client::PulpClient;
use crate::error::PulpError;
use crate::http::HttpBackend;
use crate::models::{
    PulpCollectionVersion, PulpImportTask, PulpMetadata, PulpPage, PulpTag, PulpVersionSummary,
};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `PulpError` to core `PackageStoreError`.
fn map_error(err: PulpError) -> PackageStoreError {
    match err {
        PulpError::NotFound { url } => PackageStoreError::NotFound { resource: url },
        PulpError::Timeout { .. } => PackageStoreError::Timeout,
        PulpError::ApiRequestFailed { status, url, body } => {
            if (400..500).contains(&status) {
                let message = if body.is_empty() { url } else { body };
                PackageStoreError::Rejected { status, message }
            } else {
                PackageStoreError::Network {
                    message: format!("Pulp request failed with status {status}: {url}"),
                }
            }
        }
        PulpError::InvalidResponse { message } => PackageStoreError::InvalidResponse { message },
        PulpError::Network(e) => {
            if e.is_timeout() {
                PackageStoreError::Timeout
            } else {
                PackageStoreError::Network {
                    message: e.to_string(),
                }
            }
        }
        PulpError::InvalidUrl(e) => PackageStoreError::Configuration {
            message: e.to_string(),
        },
        PulpError::JsonParse(e) => PackageStoreError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_metadata(metadata: Option<PulpMetadata>) -> CollectionMetadata {
    let Some(m) = metadata else {
        return CollectionMetadata::default();
    };
    CollectionMetadata {
        description: m.description,
        tags: m.tags.into_iter().map(PulpTag::into_name).collect(),
        authors: m.authors,
        license: m.license,
        homepage: m.homepage,
        documentation: m.documentation,
        issues: m.issues,
        repository: m.repository,
        contents: m
            .contents
            .into_iter()
            .map(|c| ContentItem {
                name: c.name,
                content_type: c.content_type,
                description: c.description,
            })
            .collect(),
        dependencies: m.dependencies,
    }
}

/// Convert a wire collection version to a domain record.
///
/// An unrecognised certification value is an invalid response.
fn to_record(version: PulpCollectionVersion) -> PackageStoreResult<CollectionRecord> {
    let certification = Certification::parse(&version.certification).ok_or_else(|| {
        PackageStoreError::InvalidResponse {
            message: format!(
                "unknown certification '{}' on {}/{} {}",
                version.certification, version.namespace, version.name, version.version
            ),
        }
    })?;

    Ok(CollectionRecord {
        id: version.id,
        namespace: version.namespace,
        name: version.name,
        version: version.version,
        is_highest: version.is_highest,
        certification,
        pulp_created: version.pulp_created,
        metadata: to_metadata(version.metadata),
        docs_blob: version.docs_blob,
        artifact: version.artifact.map(|a| ArtifactRef {
            filename: a.filename,
            sha256: a.sha256,
            size: a.size,
        }),
    })
}

fn to_record_page(
    page: PulpPage<PulpCollectionVersion>,
) -> PackageStoreResult<UpstreamPage<CollectionRecord>> {
    let results = page
        .results
        .into_iter()
        .map(to_record)
        .collect::<PackageStoreResult<Vec<_>>>()?;
    Ok(UpstreamPage::new(results, page.count))
}

fn to_summary(summary: PulpVersionSummary) -> VersionSummary {
    VersionSummary {
        id: summary.id,
        version: summary.version,
        created: summary.pulp_created,
    }
}

fn to_task_state(task: PulpImportTask) -> PackageStoreResult<ImportTaskState> {
    let state = ImportState::parse(&task.state).ok_or_else(|| PackageStoreError::InvalidResponse {
        message: format!("unknown import state '{}' for task {}", task.state, task.id),
    })?;

    let messages = task
        .messages
        .into_iter()
        .map(|m| {
            let time = m.time.to_utc().ok_or_else(|| PackageStoreError::InvalidResponse {
                message: format!("message time out of range for task {}", task.id),
            })?;
            Ok(ImportMessage {
                level: m.level,
                message: m.message,
                time,
            })
        })
        .collect::<PackageStoreResult<Vec<_>>>()?;

    Ok(ImportTaskState {
        id: task.id,
        state,
        started_at: task.started_at,
        finished_at: task.finished_at,
        error: task.error.map(|e| ImportError {
            code: e.code,
            description: e.description,
            traceback: e.traceback,
        }),
        messages,
    })
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> PackageStorePort for PulpClient<B> {
    async fn list_collections(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<CollectionRecord>> {
        let page = self.list_versions(query).await.map_err(map_error)?;
        to_record_page(page)
    }

    async fn list_collection_versions(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<CollectionRecord>> {
        let page = self.list_versions(query).await.map_err(map_error)?;
        to_record_page(page)
    }

    async fn list_version_summaries(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<VersionSummary>> {
        let page = PulpClient::list_version_summaries(self, query)
            .await
            .map_err(map_error)?;
        Ok(UpstreamPage::new(
            page.results.into_iter().map(to_summary).collect(),
            page.count,
        ))
    }

    async fn set_certification(
        &self,
        namespace: &str,
        name: &str,
        version: &str,
        certification: Certification,
    ) -> PackageStoreResult<CertificationUpdate> {
        let reply = self
            .set_certified(namespace, name, version, certification.as_str())
            .await
            .map_err(map_error)?;
        Ok(CertificationUpdate(reply))
    }

    async fn get_import_task(&self, task_id: &str) -> PackageStoreResult<ImportTaskState> {
        let task = self.get_import(task_id).await.map_err(map_error)?;
        to_task_state(task)
    }
}
