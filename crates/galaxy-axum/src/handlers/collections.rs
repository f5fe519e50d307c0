//! Collection handlers: list, detail and certification.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use galaxy_core::{CertificationUpdate, CollectionDetail, CollectionSummary, Page};
use serde::Deserialize;

use super::{QueryPairs, client_params};
use crate::error::HttpError;
use crate::extract::Identity;
use crate::state::AppState;

/// List the highest certified version of each collection.
pub async fn list(
    State(state): State<AppState>,
    Identity(_caller): Identity,
    query: QueryPairs,
) -> Result<Json<Page<CollectionSummary>>, HttpError> {
    let params = client_params(query);
    Ok(Json(state.core.collections().list_collections(&params).await?))
}

/// Get one collection, optionally at `?version=`.
pub async fn retrieve(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path((namespace, name)): Path<(String, String)>,
    query: QueryPairs,
) -> Result<Json<CollectionDetail>, HttpError> {
    let params = client_params(query);
    let detail = state
        .core
        .collections()
        .retrieve_collection(&caller, &namespace, &name, params.get("version"))
        .await?;
    Ok(Json(detail))
}

/// Request body for a certification change.
#[derive(Debug, Deserialize)]
pub struct CertificationRequest {
    pub certification: String,
}

/// Set the certification of one collection version.
///
/// An unreadable body is reported only after the permission checks, as an
/// invalid certification value.
pub async fn set_certification(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path((namespace, name, version)): Path<(String, String, String)>,
    payload: Result<Json<CertificationRequest>, JsonRejection>,
) -> Result<Json<CertificationUpdate>, HttpError> {
    let certification = match payload {
        Ok(Json(body)) => body.certification,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable certification payload");
            String::new()
        }
    };

    let updated = state
        .core
        .collections()
        .set_certification(&caller, &namespace, &name, &version, &certification)
        .await?;
    Ok(Json(updated))
}
