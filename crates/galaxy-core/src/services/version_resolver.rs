//! Builds the upstream queries behind detail lookups.
//!
//! Every builder takes the caller's [`Visibility`] so certification
//! filtering is applied at query-build time on every read path.

use crate::ports::{CoreError, UpstreamPage, UpstreamQuery, params};

use super::role_gate::Visibility;

/// Projection requested for version-history summaries.
pub const VERSION_SUMMARY_FIELDS: &str = "version,id,pulp_created,artifact";

/// Stateless builder for latest/exact-version queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionResolver;

impl VersionResolver {
    /// Query for the highest version, or one exact version when given.
    ///
    /// An empty `version` counts as absent.
    pub fn detail_query(
        namespace: &str,
        name: &str,
        version: Option<&str>,
        visibility: Visibility,
    ) -> UpstreamQuery {
        let mut query = UpstreamQuery::new()
            .with(params::NAMESPACE, namespace)
            .with(params::NAME, name);
        match version.filter(|v| !v.is_empty()) {
            Some(version) => query.set(params::VERSION, version),
            None => query.set(params::IS_HIGHEST, "true"),
        }
        visibility.apply(&mut query);
        query
    }

    /// Query for the `{version, id, created}` history of a collection.
    pub fn all_versions_query(namespace: &str, name: &str, visibility: Visibility) -> UpstreamQuery {
        let mut query = UpstreamQuery::new()
            .with(params::NAMESPACE, namespace)
            .with(params::NAME, name)
            .with(params::FIELDS, VERSION_SUMMARY_FIELDS);
        visibility.apply(&mut query);
        query
    }

    /// Query for one exact version, limited to a single result.
    pub fn version_query(
        namespace: &str,
        name: &str,
        version: &str,
        visibility: Visibility,
    ) -> UpstreamQuery {
        let mut query = UpstreamQuery::new()
            .with(params::NAMESPACE, namespace)
            .with(params::NAME, name)
            .with(params::VERSION, version)
            .with(params::LIMIT, "1");
        visibility.apply(&mut query);
        query
    }

    /// Reduce a detail result set to its single record.
    ///
    /// Zero results is `NotFound`; more than one is `Inconsistent`.
    pub fn single<T>(page: UpstreamPage<T>, what: &str) -> Result<T, CoreError> {
        let mut results = page.results.into_iter();
        match (results.next(), results.next()) {
            (Some(record), None) => Ok(record),
            (None, _) => Err(CoreError::NotFound(what.to_string())),
            (Some(_), Some(_)) => Err(CoreError::Inconsistent(format!(
                "package store returned more than one record for {what}"
            ))),
        }
    }
}
