//! Pulp package store client.
//!
//! Implements `galaxy_core::PackageStorePort` over the Pulp REST API with
//! the Galaxy plugin: collection version listings, certification changes
//! and import task status.
//!
//! ```ignore
//! use galaxy_pulp::{DefaultPulpClient, PulpClientConfig};
//!
//! let config = PulpClientConfig::new()
//!     .with_base_url("http://pulp:24817")
//!     .with_basic_auth("admin", "secret");
//! let client = DefaultPulpClient::new(&config)?;
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultPulpClient is meant to be used through the PackageStorePort trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPulpClient;

// Configuration
pub use config::{DEFAULT_API_PREFIX, DEFAULT_BASE_URL, PulpClientConfig};

// Errors surfaced while constructing a client
pub use error::PulpError;
