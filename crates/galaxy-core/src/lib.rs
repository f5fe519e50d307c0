//! Core domain, ports and services for the Galaxy UI API.
//!
//! The crate holds the certification-aware query and merge layer that sits
//! in front of a Pulp package store: role gating, paging translation,
//! latest/exact version resolution, namespace enrichment and import task
//! correlation. Adapters live in `galaxy-pulp` (package store client),
//! `galaxy-db` (local storage) and `galaxy-axum` (HTTP).

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod utils;

pub use config::GatewayConfig;
pub use domain::{
    ArtifactRef, Caller, Certification, CertificationUpdate, CollectionDetail, CollectionImport, CollectionMetadata,
    CollectionRecord, CollectionSummary, ContentItem, CurrentUser, ImportError, ImportFilter,
    ImportMessage, ImportScope, ImportSort, ImportState, ImportTaskDetail, ImportTaskState,
    ImportTaskSummary, Namespace, NamespaceSummary, NewCollectionImport, NewNamespace, Page,
    PageRequest, VersionSummary,
};
pub use ports::{
    AuthorizationError, Authorizer, CoreError, ImportRepository, NamespaceRepository,
    PackageStoreError, PackageStorePort, PackageStoreResult, Repos, RepositoryError, UpstreamPage,
    UpstreamQuery,
};
pub use services::{
    ApiCore, ClientParams, CollectionQueryGateway, GroupAuthorizer, ImportTaskService,
    PagingBridge, RoleGate, Visibility,
};
