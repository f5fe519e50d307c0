//! Batched namespace enrichment for collection listings.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::domain::{CollectionRecord, Namespace};
use crate::ports::NamespaceRepository;

/// Loads local namespace records for a set of names in one lookup.
///
/// Missing names are simply absent from the result, and a storage failure
/// degrades to an empty mapping so enrichment never fails a listing.
#[derive(Clone)]
pub struct NamespaceJoin {
    repo: Arc<dyn NamespaceRepository>,
}

impl NamespaceJoin {
    pub fn new(repo: Arc<dyn NamespaceRepository>) -> Self {
        Self { repo }
    }

    /// Distinct namespace names referenced by `records`.
    pub fn names_of<'a, I>(records: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a CollectionRecord>,
    {
        records.into_iter().map(|r| r.namespace.clone()).collect()
    }

    pub async fn load_by_names(&self, names: &BTreeSet<String>) -> HashMap<String, Namespace> {
        if names.is_empty() {
            return HashMap::new();
        }
        let names: Vec<String> = names.iter().cloned().collect();
        match self.repo.get_by_names(&names).await {
            Ok(found) => found.into_iter().map(|ns| (ns.name.clone(), ns)).collect(),
            Err(e) => {
                tracing::warn!(error = %e, count = names.len(), "Namespace enrichment failed");
                HashMap::new()
            }
        }
    }
}
