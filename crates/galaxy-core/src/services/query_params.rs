//! Client query parameter handling and translation into upstream queries.

use std::collections::BTreeMap;

use crate::domain::{Certification, PageRequest};
use crate::ports::{UpstreamQuery, params};

/// Public name of the sort parameter.
pub const SORT: &str = "sort";
/// Public name of the free-text search parameter.
pub const KEYWORDS: &str = "keywords";
/// Field excluded from list projections.
pub const DOCS_BLOB: &str = "docs_blob";

/// Raw query parameters as sent by the client, in arrival order.
///
/// A key may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientParams {
    pairs: Vec<(String, String)>,
}

impl ClientParams {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Last value sent for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every key with all of its values, keys in sorted order.
    #[must_use]
    pub fn lists(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut lists: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (k, v) in &self.pairs {
            lists.entry(k.as_str()).or_default().push(v.as_str());
        }
        lists
    }

    /// Every key with its last value.
    #[must_use]
    pub fn dict(&self) -> BTreeMap<&str, &str> {
        self.pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// Raw `offset` and `limit` values.
    #[must_use]
    pub fn paging(&self) -> (Option<&str>, Option<&str>) {
        (self.get(params::OFFSET), self.get(params::LIMIT))
    }
}

fn is_paging_key(key: &str) -> bool {
    key == params::OFFSET || key == params::LIMIT
}

/// Translate a public sort expression into the upstream ordering value.
///
/// `created` becomes `pulp_created`; a leading `-` is preserved and other
/// fields pass through. Comma-separated expressions are translated per field.
#[must_use]
pub fn translate_ordering(sort: &str) -> String {
    sort.split(',')
        .map(|field| {
            let (sign, name) = field
                .strip_prefix('-')
                .map_or(("", field), |rest| ("-", rest));
            let name = if name == "created" { "pulp_created" } else { name };
            format!("{sign}{name}")
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Upstream query for the list-collections view.
///
/// `keywords` becomes `q`, repeated values are comma-joined, and the
/// highest-certified-without-docs constraints override any client values.
/// When both `keywords` and `q` are sent, all their terms are kept under `q`,
/// `keywords` terms first.
#[must_use]
pub fn collection_list_query(client: &ClientParams, page: PageRequest) -> UpstreamQuery {
    let mut merged: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut search: Vec<&str> = Vec::new();
    for (key, values) in client.lists() {
        if is_paging_key(key) {
            continue;
        }
        // Keys arrive sorted, so `keywords` terms precede `q` terms.
        if key == KEYWORDS || key == params::SEARCH {
            search.extend(values);
        } else {
            merged.insert(key, values);
        }
    }
    if !search.is_empty() {
        merged.insert(params::SEARCH, search);
    }

    let mut query = UpstreamQuery::new();
    for (key, values) in merged {
        query.set(key, values.join(","));
    }
    query.set(params::OFFSET, page.offset.to_string());
    query.set(params::LIMIT, page.limit.to_string());
    query.set(params::IS_HIGHEST, "true");
    query.set(params::CERTIFICATION, Certification::Certified.as_str());
    query.set(params::EXCLUDE_FIELDS, DOCS_BLOB);
    query
}

/// Upstream query for the collection-version listing.
///
/// Values are single-valued (last one wins), `sort` becomes `ordering` and
/// the docs blob is always excluded.
#[must_use]
pub fn version_list_query(client: &ClientParams, page: PageRequest) -> UpstreamQuery {
    let mut query = UpstreamQuery::new();
    for (key, value) in client.dict() {
        if is_paging_key(key) {
            continue;
        }
        if key == SORT {
            if !value.is_empty() {
                query.set(params::ORDERING, translate_ordering(value));
            }
            continue;
        }
        query.set(key, value);
    }
    query.set(params::OFFSET, page.offset.to_string());
    query.set(params::LIMIT, page.limit.to_string());
    query.set(params::EXCLUDE_FIELDS, DOCS_BLOB);
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: PageRequest = PageRequest {
        offset: 0,
        limit: 10,
    };

    #[test]
    fn test_translate_ordering() {
        assert_eq!(translate_ordering("created"), "pulp_created");
        assert_eq!(translate_ordering("-created"), "-pulp_created");
        assert_eq!(translate_ordering("version"), "version");
        assert_eq!(translate_ordering("-created,name"), "-pulp_created,name");
    }

    #[test]
    fn test_collection_list_renames_keywords_and_joins_lists() {
        let client = ClientParams::new([
            ("keywords", "network"),
            ("tags", "cloud"),
            ("tags", "aws"),
            ("offset", "99"),
        ]);
        let query = collection_list_query(&client, PAGE);
        assert_eq!(query.get("q"), Some("network"));
        assert!(!query.contains("keywords"));
        assert_eq!(query.get("tags"), Some("cloud,aws"));
        assert_eq!(query.get("offset"), Some("0"));
    }

    #[test]
    fn test_collection_list_keeps_keywords_and_q_together() {
        let client = ClientParams::new([("q", "aws"), ("keywords", "network")]);
        let query = collection_list_query(&client, PAGE);
        assert_eq!(query.get("q"), Some("network,aws"));
        assert!(!query.contains("keywords"));

        let only_q = collection_list_query(&ClientParams::new([("q", "aws")]), PAGE);
        assert_eq!(only_q.get("q"), Some("aws"));
    }

    #[test]
    fn test_collection_list_forces_visibility() {
        let client = ClientParams::new([
            ("certification", "not_certified"),
            ("is_highest", "false"),
            ("exclude_fields", ""),
        ]);
        let query = collection_list_query(&client, PAGE);
        assert_eq!(query.get("certification"), Some("certified"));
        assert_eq!(query.get("is_highest"), Some("true"));
        assert_eq!(query.get("exclude_fields"), Some("docs_blob"));
    }

    #[test]
    fn test_version_list_translates_sort() {
        let client = ClientParams::new([("sort", "created"), ("namespace", "acme")]);
        let query = version_list_query(&client, PAGE);
        assert_eq!(query.get("ordering"), Some("pulp_created"));
        assert!(!query.contains("sort"));
        assert_eq!(query.get("namespace"), Some("acme"));
        assert_eq!(query.get("exclude_fields"), Some("docs_blob"));
    }

    #[test]
    fn test_version_list_last_value_wins() {
        let client = ClientParams::new([("name", "one"), ("name", "two")]);
        let query = version_list_query(&client, PAGE);
        assert_eq!(query.get("name"), Some("two"));
    }

    #[test]
    fn test_version_list_without_sort_has_no_ordering() {
        let client = ClientParams::new([("sort", "")]);
        let query = version_list_query(&client, PAGE);
        assert!(!query.contains("ordering"));
        assert!(!query.contains("sort"));
    }

    #[test]
    fn test_queries_are_deterministic() {
        let a = ClientParams::new([("b", "2"), ("a", "1")]);
        let b = ClientParams::new([("a", "1"), ("b", "2")]);
        assert_eq!(collection_list_query(&a, PAGE), collection_list_query(&b, PAGE));
    }
}
