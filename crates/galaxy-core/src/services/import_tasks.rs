//! Import task listing and retrieval, scoped to the caller.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{
    Caller, ImportFilter, ImportScope, ImportSort, ImportTaskDetail, ImportTaskSummary, Page,
    PageRequest,
};
use crate::ports::{CoreError, ImportRepository, PackageStorePort, RepositoryError};

use super::import_correlator::ImportTaskCorrelator;
use super::query_params::{ClientParams, SORT};
use super::role_gate::RoleGate;

/// Parse import list filters from client parameters.
///
/// `created` must be a `YYYY-MM-DD` date and `sort` one of `created` or
/// `-created`.
pub fn parse_import_filter(client: &ClientParams) -> Result<ImportFilter, CoreError> {
    let non_empty = |key: &str| {
        client
            .get(key)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let created = match client.get("created").filter(|v| !v.is_empty()) {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            CoreError::Validation(format!("created must be a date (YYYY-MM-DD), got '{raw}'"))
        })?),
        None => None,
    };

    let sort = match client.get(SORT).filter(|v| !v.is_empty()) {
        Some(raw) => ImportSort::parse(raw).ok_or_else(|| {
            CoreError::Validation(format!("sort must be 'created' or '-created', got '{raw}'"))
        })?,
        None => ImportSort::default(),
    };

    Ok(ImportFilter {
        namespace: non_empty("namespace"),
        name: non_empty("name"),
        version: non_empty("version"),
        created,
        sort,
    })
}

/// Service for import task status.
#[derive(Clone)]
pub struct ImportTaskService {
    repo: Arc<dyn ImportRepository>,
    store: Arc<dyn PackageStorePort>,
    role_gate: RoleGate,
    correlator: ImportTaskCorrelator,
}

impl ImportTaskService {
    pub fn new(
        repo: Arc<dyn ImportRepository>,
        store: Arc<dyn PackageStorePort>,
        role_gate: RoleGate,
        fanout: usize,
    ) -> Self {
        let correlator = ImportTaskCorrelator::new(Arc::clone(&store), fanout);
        Self {
            repo,
            store,
            role_gate,
            correlator,
        }
    }

    /// Imports visible to `caller`.
    pub async fn scope_for(&self, caller: &Caller) -> Result<ImportScope, CoreError> {
        if self.role_gate.is_privileged(caller).await? {
            Ok(ImportScope::All)
        } else {
            Ok(ImportScope::OwnedBy(caller.groups.clone()))
        }
    }

    /// List a page of imports merged with their remote state.
    pub async fn list(
        &self,
        caller: &Caller,
        filter: &ImportFilter,
        page: PageRequest,
    ) -> Result<Page<ImportTaskSummary>, CoreError> {
        let scope = self.scope_for(caller).await?;
        let (records, count) = self.repo.list(filter, &scope, page).await?;
        tracing::debug!(count, page_len = records.len(), "Listing import tasks");
        let results = self.correlator.correlate(records).await;
        Ok(Page::new(results, count))
    }

    /// Retrieve one import. Remote failures are not isolated here.
    pub async fn get(&self, caller: &Caller, task_id: &str) -> Result<ImportTaskDetail, CoreError> {
        let scope = self.scope_for(caller).await?;
        let record = self
            .repo
            .get(task_id, &scope)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => {
                    CoreError::NotFound(format!("import task {task_id}"))
                }
                other => CoreError::Repository(other),
            })?;
        let state = self.store.get_import_task(&record.task_id).await?;
        Ok(ImportTaskDetail::merged(record, state))
    }
}
