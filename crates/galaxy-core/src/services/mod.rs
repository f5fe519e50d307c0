//! Core services.
//!
//! Services orchestrate ports to implement the certification-aware query
//! layer. They depend only on port traits, never on concrete adapters.

mod api_core;
mod collection_gateway;
mod group_authorizer;
mod import_correlator;
mod import_tasks;
mod namespace_join;
mod paging;
mod query_params;
mod role_gate;
mod version_resolver;

#[cfg(test)]
pub(crate) mod test_support;

pub use api_core::ApiCore;
pub use collection_gateway::CollectionQueryGateway;
pub use group_authorizer::GroupAuthorizer;
pub use import_correlator::ImportTaskCorrelator;
pub use import_tasks::{ImportTaskService, parse_import_filter};
pub use namespace_join::NamespaceJoin;
pub use paging::PagingBridge;
pub use query_params::{ClientParams, translate_ordering};
pub use role_gate::{RoleGate, Visibility};
pub use version_resolver::VersionResolver;
