//! Collection version handlers.

use axum::Json;
use axum::extract::{Path, State};
use galaxy_core::{CollectionRecord, Page};

use super::{QueryPairs, client_params};
use crate::error::HttpError;
use crate::extract::Identity;
use crate::state::AppState;

/// List collection versions. Only `certification=certified` is open to
/// every caller.
pub async fn list(
    State(state): State<AppState>,
    Identity(caller): Identity,
    query: QueryPairs,
) -> Result<Json<Page<CollectionRecord>>, HttpError> {
    let params = client_params(query);
    Ok(Json(
        state.core.collections().list_versions(&caller, &params).await?,
    ))
}

/// Get one exact collection version.
pub async fn retrieve(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path((namespace, name, version)): Path<(String, String, String)>,
) -> Result<Json<CollectionRecord>, HttpError> {
    Ok(Json(
        state
            .core
            .collections()
            .retrieve_version(&caller, &namespace, &name, &version)
            .await?,
    ))
}
