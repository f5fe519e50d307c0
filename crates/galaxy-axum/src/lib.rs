//! Axum adapter for the galaxy collection gateway.
//!
//! Serves the UI API under `/api/_ui/v1` on top of [`galaxy_core::ApiCore`].
//! [`bootstrap`] is the composition root: it opens the `SQLite` store,
//! builds the Pulp client and wires both into the core.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the unit test target
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use chrono as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use extract::{GROUPS_HEADER, Identity, USERNAME_HEADER};
pub use routes::{API_PREFIX, create_router};
pub use state::AppState;
