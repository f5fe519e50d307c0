//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository traits are minimal and lookup-focused
//! - The package store port speaks in domain records, not wire payloads

pub mod authorization;
pub mod import_repository;
pub mod namespace_repository;
pub mod package_store;

use std::sync::Arc;
use thiserror::Error;

pub use authorization::{AuthorizationError, Authorizer};
pub use import_repository::ImportRepository;
pub use namespace_repository::NamespaceRepository;
pub use package_store::{
    PackageStoreError, PackageStorePort, PackageStoreResult, UpstreamPage, UpstreamQuery, params,
};

/// Container for all repository trait objects.
///
/// Lives in `galaxy-core` so that `ApiCore` can accept it without depending
/// on `galaxy-db`.
///
/// ```ignore
/// // In galaxy-db factory:
/// let repos = StoreFactory::build_repos(&pool);
/// let core = ApiCore::new(repos, package_store, authorizer, config);
/// ```
#[derive(Clone)]
pub struct Repos {
    /// Namespace lookups used for detail checks and list enrichment.
    pub namespaces: Arc<dyn NamespaceRepository>,
    /// Import ownership records.
    pub imports: Arc<dyn ImportRepository>,
}

impl Repos {
    pub fn new(namespaces: Arc<dyn NamespaceRepository>, imports: Arc<dyn ImportRepository>) -> Self {
        Self {
            namespaces,
            imports,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored data could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A namespace, collection, version or import does not exist (or is not
    /// visible to the caller).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller lacks the role or object permission for this action.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Invalid input (paging, dates, certification values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The package store call failed.
    #[error(transparent)]
    Upstream(#[from] PackageStoreError),

    /// The package store returned data that breaks its own invariants.
    #[error("Inconsistent upstream data: {0}")]
    Inconsistent(String),

    /// The authorization check could not be evaluated.
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
