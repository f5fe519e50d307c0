//! In-memory port implementations shared by service tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    Caller, Certification, CertificationUpdate, CollectionImport, CollectionMetadata,
    CollectionRecord, ImportFilter, ImportScope, ImportSort, ImportState, ImportTaskState,
    Namespace, NewCollectionImport, NewNamespace, PageRequest, VersionSummary,
};
use crate::ports::{
    AuthorizationError, Authorizer, ImportRepository, NamespaceRepository, PackageStoreError,
    PackageStorePort, PackageStoreResult, Repos, RepositoryError, UpstreamPage, UpstreamQuery,
    params,
};

pub fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

pub fn record(
    namespace: &str,
    name: &str,
    version: &str,
    is_highest: bool,
    certification: Certification,
) -> CollectionRecord {
    CollectionRecord {
        id: format!("{namespace}-{name}-{version}"),
        namespace: namespace.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        is_highest,
        certification,
        pulp_created: ts(1, 0),
        metadata: CollectionMetadata::default(),
        docs_blob: Some(serde_json::json!({"collection_readme": {"html": "<p>hi</p>"}})),
        artifact: None,
    }
}

pub fn namespace(id: i64, name: &str, groups: &[&str]) -> Namespace {
    Namespace {
        id,
        name: name.to_string(),
        company: Some(format!("{name} inc")),
        email: None,
        avatar_url: None,
        description: None,
        groups: groups.iter().map(|g| (*g).to_string()).collect(),
    }
}

pub fn import(task_id: &str, namespace: &str, created_at: DateTime<Utc>) -> CollectionImport {
    CollectionImport {
        task_id: task_id.to_string(),
        namespace: namespace.to_string(),
        name: "tools".to_string(),
        version: "1.0.0".to_string(),
        created_at,
    }
}

pub fn task_state(id: &str, state: ImportState) -> ImportTaskState {
    ImportTaskState {
        id: id.to_string(),
        state,
        started_at: Some(ts(1, 1)),
        finished_at: state.is_terminal().then(|| ts(1, 2)),
        error: None,
        messages: vec![],
    }
}

pub fn regular_caller() -> Caller {
    Caller::new("alice", ["acme-owners"])
}

pub fn privileged_caller() -> Caller {
    Caller::new("pat", ["system:partner-engineers"])
}

// ─────────────────────────────────────────────────────────────────────────────
// Package store
// ─────────────────────────────────────────────────────────────────────────────

/// Which port method received a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Collections,
    Versions,
    Summaries,
}

#[derive(Default)]
pub struct FakePackageStore {
    pub records: Mutex<Vec<CollectionRecord>>,
    pub tasks: Mutex<HashMap<String, ImportTaskState>>,
    pub failing_tasks: Mutex<HashSet<String>>,
    pub queries: Mutex<Vec<(Call, UpstreamQuery)>>,
    pub certifications: Mutex<Vec<(String, String, String, Certification)>>,
    pub offline: Mutex<bool>,
    pub reported_count: Mutex<Option<u64>>,
}

impl FakePackageStore {
    pub fn with_records(records: Vec<CollectionRecord>) -> Self {
        let store = Self::default();
        *store.records.lock().unwrap() = records;
        store
    }

    pub fn add_task(&self, state: ImportTaskState) {
        self.tasks.lock().unwrap().insert(state.id.clone(), state);
    }

    pub fn fail_task(&self, task_id: &str) {
        self.failing_tasks.lock().unwrap().insert(task_id.to_string());
    }

    pub fn go_offline(&self) {
        *self.offline.lock().unwrap() = true;
    }

    pub fn last_query(&self, call: Call) -> UpstreamQuery {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(c, _)| *c == call)
            .map(|(_, q)| q.clone())
            .unwrap()
    }

    fn check_online(&self) -> PackageStoreResult<()> {
        if *self.offline.lock().unwrap() {
            return Err(PackageStoreError::Network {
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }

    fn select(&self, call: Call, query: &UpstreamQuery) -> UpstreamPage<CollectionRecord> {
        self.queries.lock().unwrap().push((call, query.clone()));
        let matches = |r: &CollectionRecord| {
            query.get(params::NAMESPACE).is_none_or(|v| v == r.namespace)
                && query.get(params::NAME).is_none_or(|v| v == r.name)
                && query.get(params::VERSION).is_none_or(|v| v == r.version)
                && query
                    .get(params::IS_HIGHEST)
                    .is_none_or(|v| (v == "true") == r.is_highest)
                && query
                    .get(params::CERTIFICATION)
                    .is_none_or(|v| v == r.certification.as_str())
        };
        let all: Vec<CollectionRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| matches(r))
            .cloned()
            .collect();
        let count = self
            .reported_count
            .lock()
            .unwrap()
            .unwrap_or(all.len() as u64);
        let offset = query
            .get(params::OFFSET)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let limit = query
            .get(params::LIMIT)
            .and_then(|v| v.parse().ok())
            .unwrap_or(usize::MAX);
        let results = all.into_iter().skip(offset).take(limit).collect();
        UpstreamPage::new(results, count)
    }
}

#[async_trait]
impl PackageStorePort for FakePackageStore {
    async fn list_collections(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<CollectionRecord>> {
        self.check_online()?;
        Ok(self.select(Call::Collections, query))
    }

    async fn list_collection_versions(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<CollectionRecord>> {
        self.check_online()?;
        Ok(self.select(Call::Versions, query))
    }

    async fn list_version_summaries(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<VersionSummary>> {
        self.check_online()?;
        let page = self.select(Call::Summaries, query);
        let results = page
            .results
            .into_iter()
            .map(|r| VersionSummary {
                id: r.id,
                version: r.version,
                created: r.pulp_created,
            })
            .collect();
        Ok(UpstreamPage::new(results, page.count))
    }

    async fn set_certification(
        &self,
        namespace: &str,
        name: &str,
        version: &str,
        certification: Certification,
    ) -> PackageStoreResult<CertificationUpdate> {
        self.check_online()?;
        self.certifications.lock().unwrap().push((
            namespace.to_string(),
            name.to_string(),
            version.to_string(),
            certification,
        ));
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.namespace == namespace && r.name == name && r.version == version)
            .ok_or_else(|| PackageStoreError::NotFound {
                resource: format!("{namespace}/{name}/{version}"),
            })?;
        record.certification = certification;
        Ok(CertificationUpdate(serde_json::to_value(&*record).unwrap()))
    }

    async fn get_import_task(&self, task_id: &str) -> PackageStoreResult<ImportTaskState> {
        self.check_online()?;
        if self.failing_tasks.lock().unwrap().contains(task_id) {
            return Err(PackageStoreError::Timeout);
        }
        self.tasks
            .lock()
            .unwrap()
            .get(task_id)
            .cloned()
            .ok_or_else(|| PackageStoreError::NotFound {
                resource: format!("task {task_id}"),
            })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repositories
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockNamespaceRepo {
    pub namespaces: Mutex<Vec<Namespace>>,
    pub broken: Mutex<bool>,
    pub batch_calls: Mutex<Vec<Vec<String>>>,
}

impl MockNamespaceRepo {
    pub fn with(namespaces: Vec<Namespace>) -> Self {
        let repo = Self::default();
        *repo.namespaces.lock().unwrap() = namespaces;
        repo
    }
}

#[async_trait]
impl NamespaceRepository for MockNamespaceRepo {
    async fn get_by_name(&self, name: &str) -> Result<Namespace, RepositoryError> {
        self.namespaces
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.name == name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("namespace={name}")))
    }

    async fn get_by_names(&self, names: &[String]) -> Result<Vec<Namespace>, RepositoryError> {
        self.batch_calls.lock().unwrap().push(names.to_vec());
        if *self.broken.lock().unwrap() {
            return Err(RepositoryError::Storage("database is locked".to_string()));
        }
        Ok(self
            .namespaces
            .lock()
            .unwrap()
            .iter()
            .filter(|n| names.contains(&n.name))
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Namespace>, RepositoryError> {
        Ok(self.namespaces.lock().unwrap().clone())
    }

    async fn insert(&self, namespace: &NewNamespace) -> Result<Namespace, RepositoryError> {
        let mut namespaces = self.namespaces.lock().unwrap();
        if namespaces.iter().any(|n| n.name == namespace.name) {
            return Err(RepositoryError::AlreadyExists(namespace.name.clone()));
        }
        let persisted = Namespace {
            id: namespaces.len() as i64 + 1,
            name: namespace.name.clone(),
            company: namespace.company.clone(),
            email: namespace.email.clone(),
            avatar_url: namespace.avatar_url.clone(),
            description: namespace.description.clone(),
            groups: namespace.groups.clone(),
        };
        namespaces.push(persisted.clone());
        Ok(persisted)
    }
}

/// Import records plus the namespace ownership used for scoping.
#[derive(Default)]
pub struct MockImportRepo {
    pub imports: Mutex<Vec<CollectionImport>>,
    pub owners: Mutex<HashMap<String, Vec<String>>>,
}

impl MockImportRepo {
    pub fn with(imports: Vec<CollectionImport>, owners: &[(&str, &[&str])]) -> Self {
        let repo = Self::default();
        *repo.imports.lock().unwrap() = imports;
        *repo.owners.lock().unwrap() = owners
            .iter()
            .map(|(ns, groups)| {
                (
                    (*ns).to_string(),
                    groups.iter().map(|g| (*g).to_string()).collect(),
                )
            })
            .collect();
        repo
    }

    fn in_scope(&self, import: &CollectionImport, scope: &ImportScope) -> bool {
        match scope {
            ImportScope::All => true,
            ImportScope::OwnedBy(groups) => self
                .owners
                .lock()
                .unwrap()
                .get(&import.namespace)
                .is_some_and(|owners| owners.iter().any(|o| groups.contains(o))),
        }
    }
}

#[async_trait]
impl ImportRepository for MockImportRepo {
    async fn get(
        &self,
        task_id: &str,
        scope: &ImportScope,
    ) -> Result<CollectionImport, RepositoryError> {
        self.imports
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.task_id == task_id && self.in_scope(i, scope))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("task_id={task_id}")))
    }

    async fn list(
        &self,
        filter: &ImportFilter,
        scope: &ImportScope,
        page: PageRequest,
    ) -> Result<(Vec<CollectionImport>, u64), RepositoryError> {
        let mut matching: Vec<CollectionImport> = self
            .imports
            .lock()
            .unwrap()
            .iter()
            .filter(|i| self.in_scope(i, scope))
            .filter(|i| filter.namespace.as_ref().is_none_or(|v| *v == i.namespace))
            .filter(|i| filter.name.as_ref().is_none_or(|v| *v == i.name))
            .filter(|i| filter.version.as_ref().is_none_or(|v| *v == i.version))
            .filter(|i| filter.created.is_none_or(|d| i.created_at.date_naive() == d))
            .cloned()
            .collect();
        matching.sort_by_key(|i| i.created_at);
        if filter.sort == ImportSort::CreatedDesc {
            matching.reverse();
        }
        let count = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(page.offset).unwrap())
            .take(usize::try_from(page.limit).unwrap())
            .collect();
        Ok((items, count))
    }

    async fn insert(
        &self,
        import: &NewCollectionImport,
    ) -> Result<CollectionImport, RepositoryError> {
        let persisted = CollectionImport {
            task_id: import.task_id.clone(),
            namespace: import.namespace.clone(),
            name: import.name.clone(),
            version: import.version.clone(),
            created_at: import.created_at,
        };
        self.imports.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }
}

/// Privileged iff the caller is in `system:partner-engineers`; may manage a
/// namespace iff privileged or sharing a group with it.
pub struct StaticAuthorizer;

#[async_trait]
impl Authorizer for StaticAuthorizer {
    async fn is_privileged(&self, caller: &Caller) -> Result<bool, AuthorizationError> {
        Ok(caller.is_member_of("system:partner-engineers"))
    }

    async fn can_manage_namespace(
        &self,
        caller: &Caller,
        namespace: &Namespace,
    ) -> Result<bool, AuthorizationError> {
        Ok(caller.is_member_of("system:partner-engineers")
            || caller.shares_group_with(&namespace.groups))
    }
}

pub fn repos(namespaces: Arc<MockNamespaceRepo>, imports: Arc<MockImportRepo>) -> Repos {
    Repos::new(namespaces, imports)
}
