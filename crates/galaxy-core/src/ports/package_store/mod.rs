//! Package store port definitions.
//!
//! This module defines the port trait and query types for talking to the
//! remote package store. The implementation lives in `galaxy-pulp`.

mod client;
mod error;
mod types;

pub use client::PackageStorePort;
pub use error::{PackageStoreError, PackageStoreResult};
pub use types::{UpstreamPage, UpstreamQuery, params};
