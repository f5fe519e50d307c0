//! Query and response types exchanged with the package store.

use std::collections::BTreeMap;

/// Upstream query parameter names.
pub mod params {
    pub const OFFSET: &str = "offset";
    pub const LIMIT: &str = "limit";
    pub const NAMESPACE: &str = "namespace";
    pub const NAME: &str = "name";
    pub const VERSION: &str = "version";
    pub const IS_HIGHEST: &str = "is_highest";
    pub const CERTIFICATION: &str = "certification";
    pub const EXCLUDE_FIELDS: &str = "exclude_fields";
    pub const FIELDS: &str = "fields";
    pub const ORDERING: &str = "ordering";
    pub const SEARCH: &str = "q";
}

/// Query parameters for an upstream collection-version listing.
///
/// Parameters are kept in an ordered map so the same logical query always
/// produces the same query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamQuery {
    params: BTreeMap<String, String>,
}

impl UpstreamQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// One page of an upstream listing: the items plus the total match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamPage<T> {
    pub results: Vec<T>,
    pub count: u64,
}

impl<T> UpstreamPage<T> {
    #[must_use]
    pub const fn new(results: Vec<T>, count: u64) -> Self {
        Self { results, count }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}
