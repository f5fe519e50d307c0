//! Certification-aware collection queries.
//!
//! Orchestrates the role gate, paging bridge, version resolver and
//! namespace join to answer collection and collection-version requests.

use std::sync::Arc;

use crate::domain::{
    Caller, Certification, CertificationUpdate, CollectionDetail, CollectionRecord,
    CollectionSummary, Namespace, NamespaceSummary, Page,
};
use crate::ports::{CoreError, NamespaceRepository, PackageStorePort, RepositoryError, params};
use crate::utils::validation::{validate_collection_key, validate_version_key};

use super::namespace_join::NamespaceJoin;
use super::paging::PagingBridge;
use super::query_params::{ClientParams, collection_list_query, version_list_query};
use super::role_gate::RoleGate;
use super::version_resolver::VersionResolver;

/// Gateway for collection reads and certification changes.
#[derive(Clone)]
pub struct CollectionQueryGateway {
    store: Arc<dyn PackageStorePort>,
    namespaces: Arc<dyn NamespaceRepository>,
    join: NamespaceJoin,
    role_gate: RoleGate,
    paging: PagingBridge,
}

impl CollectionQueryGateway {
    pub fn new(
        store: Arc<dyn PackageStorePort>,
        namespaces: Arc<dyn NamespaceRepository>,
        role_gate: RoleGate,
        paging: PagingBridge,
    ) -> Self {
        Self {
            store,
            join: NamespaceJoin::new(Arc::clone(&namespaces)),
            namespaces,
            role_gate,
            paging,
        }
    }

    /// List collections: highest certified versions only, with namespace
    /// metadata attached where known.
    pub async fn list_collections(
        &self,
        client: &ClientParams,
    ) -> Result<Page<CollectionSummary>, CoreError> {
        let (offset, limit) = client.paging();
        let page = self.paging.page_request(offset, limit)?;
        let query = collection_list_query(client, page);
        tracing::debug!(?query, "Listing collections upstream");

        let upstream = self.store.list_collections(&query).await?;
        let names = NamespaceJoin::names_of(&upstream.results);
        let namespaces = self.join.load_by_names(&names).await;

        Ok(self.paging.wrap_response(upstream).map(|mut record| {
            record.docs_blob = None;
            let namespace = namespaces.get(&record.namespace).map(NamespaceSummary::from);
            CollectionSummary::new(record, namespace)
        }))
    }

    /// Retrieve one collection at its highest version, or at `version`.
    pub async fn retrieve_collection(
        &self,
        caller: &Caller,
        namespace: &str,
        name: &str,
        version: Option<&str>,
    ) -> Result<CollectionDetail, CoreError> {
        validate_collection_key(namespace, name)?;
        let namespace_obj = self.local_namespace(namespace).await?;
        let visibility = self.role_gate.visibility(caller).await?;

        let query = VersionResolver::detail_query(namespace, name, version, visibility);
        tracing::debug!(?query, "Resolving collection detail upstream");
        let upstream = self.store.list_collection_versions(&query).await?;
        let latest = VersionResolver::single(upstream, &format!("collection {namespace}/{name}"))?;

        let history_query = VersionResolver::all_versions_query(namespace, name, visibility);
        let all_versions = self.store.list_version_summaries(&history_query).await?;

        Ok(CollectionDetail {
            id: latest.id.clone(),
            name: latest.name.clone(),
            namespace: NamespaceSummary::from(&namespace_obj),
            latest_version: latest,
            all_versions: all_versions.results,
        })
    }

    /// List collection versions.
    ///
    /// Anything other than an explicit `certification=certified` filter needs
    /// the privileged role.
    pub async fn list_versions(
        &self,
        caller: &Caller,
        client: &ClientParams,
    ) -> Result<Page<CollectionRecord>, CoreError> {
        let (offset, limit) = client.paging();
        let page = self.paging.page_request(offset, limit)?;

        if client.get(params::CERTIFICATION) != Some(Certification::Certified.as_str()) {
            self.role_gate
                .require_privileged(caller, "view non-certified content")
                .await?;
        }

        let query = version_list_query(client, page);
        tracing::debug!(?query, "Listing collection versions upstream");
        let upstream = self.store.list_collection_versions(&query).await?;
        Ok(self.paging.wrap_response(upstream).map(|mut record| {
            record.docs_blob = None;
            record
        }))
    }

    /// Retrieve one exact collection version.
    pub async fn retrieve_version(
        &self,
        caller: &Caller,
        namespace: &str,
        name: &str,
        version: &str,
    ) -> Result<CollectionRecord, CoreError> {
        validate_version_key(namespace, name, version)?;
        let visibility = self.role_gate.visibility(caller).await?;
        let query = VersionResolver::version_query(namespace, name, version, visibility);
        let upstream = self.store.list_collection_versions(&query).await?;
        VersionResolver::single(
            upstream,
            &format!("collection version {namespace}/{name}/{version}"),
        )
    }

    /// Change the certification of a version and echo the upstream result.
    pub async fn set_certification(
        &self,
        caller: &Caller,
        namespace: &str,
        name: &str,
        version: &str,
        certification: &str,
    ) -> Result<CertificationUpdate, CoreError> {
        self.role_gate
            .require_privileged(caller, "change certification")
            .await?;
        validate_version_key(namespace, name, version)?;
        let namespace_obj = self.local_namespace(namespace).await?;
        self.role_gate
            .require_namespace_access(caller, &namespace_obj)
            .await?;

        let state = Certification::parse(certification).ok_or_else(|| {
            CoreError::Validation(format!(
                "'{certification}' is not a valid certification; expected one of certified, not_certified, needs_review"
            ))
        })?;

        tracing::info!(
            user = %caller.username,
            %namespace,
            %name,
            %version,
            certification = %state,
            "Setting collection certification"
        );
        let updated = self
            .store
            .set_certification(namespace, name, version, state)
            .await?;
        tracing::debug!(reported = ?updated.certification(), "Certification updated upstream");
        Ok(updated)
    }

    async fn local_namespace(&self, name: &str) -> Result<Namespace, CoreError> {
        self.namespaces.get_by_name(name).await.map_err(|e| match e {
            RepositoryError::NotFound(_) => CoreError::NotFound(format!("namespace {name}")),
            other => CoreError::Repository(other),
        })
    }
}
