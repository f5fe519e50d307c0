//! URL construction helpers for the Pulp API.
//!
//! Pure functions so every call builds URLs the same way.

use galaxy_core::UpstreamQuery;
use url::Url;

use crate::models::PulpConfig;

/// Path of the collection version listing.
pub const COLLECTION_VERSIONS_PATH: &str = "/pulp/api/v3/content/ansible/collection_versions/";

fn join_path(config: &PulpConfig, path: &str) -> Url {
    let base = config.base_url.path().trim_end_matches('/');
    let mut url = config.base_url.clone();
    url.set_path(&format!("{base}{path}"));
    url.set_query(None);
    url
}

/// Build the collection version listing URL with query parameters in key
/// order.
pub fn build_versions_url(config: &PulpConfig, query: &UpstreamQuery) -> Url {
    let mut url = join_path(config, COLLECTION_VERSIONS_PATH);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.iter());
    }
    url
}

/// Build the certification endpoint for one collection version.
pub fn build_certification_url(
    config: &PulpConfig,
    namespace: &str,
    name: &str,
    version: &str,
) -> Url {
    let path = format!(
        "{}v3/collections/{}/{}/versions/{}/certified/",
        config.api_prefix,
        urlencoding::encode(namespace),
        urlencoding::encode(name),
        urlencoding::encode(version),
    );
    join_path(config, &path)
}

/// Build the import task status URL.
pub fn build_import_url(config: &PulpConfig, task_id: &str) -> Url {
    let path = format!(
        "{}v3/imports/collections/{}/",
        config.api_prefix,
        urlencoding::encode(task_id)
    );
    join_path(config, &path)
}
