//! Merges local import records with remote task state.

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream;

use crate::domain::{CollectionImport, ImportTaskSummary};
use crate::ports::PackageStorePort;

/// Fetches remote task state for a page of imports.
///
/// Fetches run concurrently up to `fanout` at a time and results come back
/// in the order of the input page. A failed fetch degrades only its own
/// entry.
#[derive(Clone)]
pub struct ImportTaskCorrelator {
    store: Arc<dyn PackageStorePort>,
    fanout: usize,
}

impl ImportTaskCorrelator {
    pub fn new(store: Arc<dyn PackageStorePort>, fanout: usize) -> Self {
        Self {
            store,
            fanout: fanout.max(1),
        }
    }

    pub async fn correlate(&self, records: Vec<CollectionImport>) -> Vec<ImportTaskSummary> {
        let store = self.store.as_ref();
        stream::iter(records)
            .map(|record| async move {
                match store.get_import_task(&record.task_id).await {
                    Ok(state) => ImportTaskSummary::merged(record, state),
                    Err(e) => {
                        tracing::warn!(
                            task_id = %record.task_id,
                            error = %e,
                            "Import task state unavailable"
                        );
                        ImportTaskSummary::degraded(record, e.to_string())
                    }
                }
            })
            .buffered(self.fanout)
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImportState;
    use crate::services::test_support::{FakePackageStore, import, task_state, ts};

    #[tokio::test]
    async fn test_order_preserved_and_failure_isolated() {
        let store = Arc::new(FakePackageStore::default());
        store.add_task(task_state("t1", ImportState::Completed));
        store.add_task(task_state("t3", ImportState::Running));
        store.fail_task("t2");
        let correlator = ImportTaskCorrelator::new(store, 2);

        let records = vec![
            import("t1", "acme", ts(1, 0)),
            import("t2", "acme", ts(2, 0)),
            import("t3", "acme", ts(3, 0)),
        ];
        let merged = correlator.correlate(records).await;

        let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
        assert_eq!(merged[0].state, Some(ImportState::Completed));
        assert!(merged[1].degraded);
        assert!(merged[1].unavailable_reason.is_some());
        assert_eq!(merged[2].state, Some(ImportState::Running));
    }

    #[tokio::test]
    async fn test_unknown_remote_task_is_degraded() {
        let store = Arc::new(FakePackageStore::default());
        let correlator = ImportTaskCorrelator::new(store, 8);

        let merged = correlator
            .correlate(vec![import("missing", "acme", ts(1, 0))])
            .await;
        assert_eq!(merged.len(), 1);
        assert!(merged[0].degraded);
    }

    #[tokio::test]
    async fn test_zero_fanout_still_progresses() {
        let store = Arc::new(FakePackageStore::default());
        store.add_task(task_state("t1", ImportState::Waiting));
        let correlator = ImportTaskCorrelator::new(store, 0);

        let merged = correlator.correlate(vec![import("t1", "acme", ts(1, 0))]).await;
        assert_eq!(merged[0].state, Some(ImportState::Waiting));
    }
}
