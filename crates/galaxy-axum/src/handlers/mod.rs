//! HTTP request handlers for the UI API.
//!
//! Handlers are thin: they pull the caller and raw parameters off the
//! request and delegate to `ApiCore`.

pub mod collections;
pub mod imports;
pub mod me;
pub mod versions;

use galaxy_core::ClientParams;

/// Query string pairs in arrival order, repeated keys included.
pub(crate) type QueryPairs = axum::extract::Query<Vec<(String, String)>>;

pub(crate) fn client_params(axum::extract::Query(pairs): QueryPairs) -> ClientParams {
    ClientParams::new(pairs)
}
