//! Collection version operations.

use galaxy_core::UpstreamQuery;

use crate::error::PulpResult;
use crate::http::HttpBackend;
use crate::models::{CertificationInfo, PulpCollectionVersion, PulpPage, PulpVersionSummary};
use crate::url::{build_certification_url, build_versions_url};

use super::PulpClient;

impl<B: HttpBackend> PulpClient<B> {
    /// List collection versions matching `query`.
    pub(crate) async fn list_versions(
        &self,
        query: &UpstreamQuery,
    ) -> PulpResult<PulpPage<PulpCollectionVersion>> {
        let url = build_versions_url(&self.config, query);
        let page: PulpPage<PulpCollectionVersion> = self.backend.get_json(&url).await?;
        tracing::debug!(
            %url,
            count = page.count,
            has_next = page.next.is_some(),
            "Listed collection versions"
        );
        Ok(page)
    }

    /// List the reduced version projection matching `query`.
    pub(crate) async fn list_version_summaries(
        &self,
        query: &UpstreamQuery,
    ) -> PulpResult<PulpPage<PulpVersionSummary>> {
        let url = build_versions_url(&self.config, query);
        tracing::debug!(%url, "Listing collection version summaries");
        self.backend.get_json(&url).await
    }

    /// Set the certification of one version. Sent once, never retried.
    ///
    /// The reply is returned as raw JSON.
    pub(crate) async fn set_certified(
        &self,
        namespace: &str,
        name: &str,
        version: &str,
        certification: &str,
    ) -> PulpResult<serde_json::Value> {
        let url = build_certification_url(&self.config, namespace, name, version);
        let body = serde_json::to_value(CertificationInfo { certification })?;
        tracing::debug!(%url, certification, "Setting certification");
        self.backend.put_json(&url, body).await
    }
}
