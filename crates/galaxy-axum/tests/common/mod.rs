//! Shared harness for router tests: an in-memory database, a fake package
//! store and request helpers.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use galaxy_axum::{AxumContext, CorsConfig, GROUPS_HEADER, USERNAME_HEADER, create_router};
use galaxy_core::ports::params;
use galaxy_core::{
    ApiCore, Certification, CertificationUpdate, CollectionMetadata, CollectionRecord,
    GatewayConfig, GroupAuthorizer, ImportState, ImportTaskState, NewCollectionImport,
    NewNamespace, PackageStoreError, PackageStorePort, PackageStoreResult, UpstreamPage,
    UpstreamQuery, VersionSummary,
};
use galaxy_db::TestDb;

pub const PRIVILEGED: (&str, &str) = ("pat", "system:partner-engineers");
pub const ACME_OWNER: (&str, &str) = ("alice", "acme-owners");
pub const OUTSIDER: (&str, &str) = ("mallory", "nobody");

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
        id: format!("{namespace}.{name}.{version}"),
        namespace: namespace.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        is_highest,
        certification,
        pulp_created: ts(1, 0),
        metadata: CollectionMetadata::default(),
        docs_blob: Some(serde_json::json!({"collection_readme": {"html": "<h1>tools</h1>"}})),
        artifact: None,
    }
}

pub fn task(id: &str, state: ImportState) -> ImportTaskState {
    ImportTaskState {
        id: id.to_string(),
        state,
        started_at: Some(ts(1, 1)),
        finished_at: None,
        error: None,
        messages: vec![],
    }
}

/// In-memory package store that filters on the exact-match parameters the
/// gateway sends.
#[derive(Default)]
pub struct FakeStore {
    pub records: Mutex<Vec<CollectionRecord>>,
    pub tasks: Mutex<HashMap<String, ImportTaskState>>,
    pub failing_tasks: Mutex<HashSet<String>>,
    pub timing_out: Mutex<bool>,
    pub queries: Mutex<Vec<UpstreamQuery>>,
    pub certifications: Mutex<Vec<(String, String, String, Certification)>>,
}

impl FakeStore {
    pub fn with_records(records: Vec<CollectionRecord>) -> Self {
        let store = Self::default();
        *store.records.lock().unwrap() = records;
        store
    }

    pub fn add_task(&self, state: ImportTaskState) {
        self.tasks.lock().unwrap().insert(state.id.clone(), state);
    }

    pub fn fail_task(&self, id: &str) {
        self.failing_tasks.lock().unwrap().insert(id.to_string());
    }

    pub fn time_out(&self) {
        *self.timing_out.lock().unwrap() = true;
    }

    pub fn last_query(&self) -> UpstreamQuery {
        self.queries.lock().unwrap().last().cloned().unwrap()
    }

    fn check(&self) -> PackageStoreResult<()> {
        if *self.timing_out.lock().unwrap() {
            return Err(PackageStoreError::Timeout);
        }
        Ok(())
    }

    fn select(&self, query: &UpstreamQuery) -> Vec<CollectionRecord> {
        self.queries.lock().unwrap().push(query.clone());
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
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| matches(r))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PackageStorePort for FakeStore {
    async fn list_collections(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<CollectionRecord>> {
        self.check()?;
        let results = self.select(query);
        let count = results.len() as u64;
        Ok(UpstreamPage::new(results, count))
    }

    async fn list_collection_versions(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<CollectionRecord>> {
        self.list_collections(query).await
    }

    async fn list_version_summaries(
        &self,
        query: &UpstreamQuery,
    ) -> PackageStoreResult<UpstreamPage<VersionSummary>> {
        self.check()?;
        let results: Vec<VersionSummary> = self
            .select(query)
            .into_iter()
            .map(|r| VersionSummary {
                id: r.id,
                version: r.version,
                created: r.pulp_created,
            })
            .collect();
        let count = results.len() as u64;
        Ok(UpstreamPage::new(results, count))
    }

    async fn set_certification(
        &self,
        namespace: &str,
        name: &str,
        version: &str,
        certification: Certification,
    ) -> PackageStoreResult<CertificationUpdate> {
        self.check()?;
        self.certifications.lock().unwrap().push((
            namespace.to_string(),
            name.to_string(),
            version.to_string(),
            certification,
        ));
        let mut records = self.records.lock().unwrap();
        let found = records
            .iter_mut()
            .find(|r| r.namespace == namespace && r.name == name && r.version == version)
            .ok_or_else(|| PackageStoreError::NotFound {
                resource: format!("{namespace}/{name}/{version}"),
            })?;
        found.certification = certification;
        Ok(CertificationUpdate(serde_json::to_value(&*found).unwrap()))
    }

    async fn get_import_task(&self, task_id: &str) -> PackageStoreResult<ImportTaskState> {
        self.check()?;
        if self.failing_tasks.lock().unwrap().contains(task_id) {
            return Err(PackageStoreError::Network {
                message: "connection reset".to_string(),
            });
        }
        self.tasks
            .lock()
            .unwrap()
            .get(task_id)
            .cloned()
            .ok_or_else(|| PackageStoreError::NotFound {
                resource: task_id.to_string(),
            })
    }
}

/// A router over a seeded database and a fake store.
///
/// Namespaces: `acme` owned by `acme-owners`, `beta` owned by `beta-owners`.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<FakeStore>,
    pub db: TestDb,
}

impl TestApp {
    pub async fn new(store: FakeStore) -> Self {
        let db = TestDb::new().await.unwrap();
        let repos = db.repos();
        repos
            .namespaces
            .insert(
                &NewNamespace::named("acme")
                    .with_company("Acme")
                    .with_groups(["acme-owners"]),
            )
            .await
            .unwrap();
        repos
            .namespaces
            .insert(&NewNamespace::named("beta").with_groups(["beta-owners"]))
            .await
            .unwrap();

        let store = Arc::new(store);
        let port: Arc<dyn PackageStorePort> = store.clone();
        let config = GatewayConfig::default();
        let core = ApiCore::new(
            repos,
            port,
            Arc::new(GroupAuthorizer::new(config.privileged_group.clone())),
            &config,
        );
        let router = create_router(AxumContext::new(Arc::new(core)), &CorsConfig::AllowAll);

        Self { router, store, db }
    }

    pub async fn record_import(&self, task_id: &str, namespace: &str, created_at: DateTime<Utc>) {
        self.db
            .repos()
            .imports
            .insert(&NewCollectionImport {
                task_id: task_id.to_string(),
                namespace: namespace.to_string(),
                name: "tools".to_string(),
                version: "1.0.0".to_string(),
                created_at,
            })
            .await
            .unwrap();
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn get(&self, uri: &str, caller: Option<(&str, &str)>) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some((user, groups)) = caller {
            builder = builder
                .header(USERNAME_HEADER, user)
                .header(GROUPS_HEADER, groups);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn put_json(
        &self,
        uri: &str,
        body: &str,
        caller: (&str, &str),
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .header(USERNAME_HEADER, caller.0)
            .header(GROUPS_HEADER, caller.1)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }
}
