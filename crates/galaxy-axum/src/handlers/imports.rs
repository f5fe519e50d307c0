//! Import task handlers.

use axum::Json;
use axum::extract::{Path, State};
use galaxy_core::services::parse_import_filter;
use galaxy_core::{ImportTaskDetail, ImportTaskSummary, Page};

use super::{QueryPairs, client_params};
use crate::error::HttpError;
use crate::extract::Identity;
use crate::state::AppState;

/// List the caller's imports with their current task state.
pub async fn list(
    State(state): State<AppState>,
    Identity(caller): Identity,
    query: QueryPairs,
) -> Result<Json<Page<ImportTaskSummary>>, HttpError> {
    let params = client_params(query);
    let filter = parse_import_filter(&params)?;
    let (offset, limit) = params.paging();
    let page = state.core.paging().page_request(offset, limit)?;

    Ok(Json(state.core.imports().list(&caller, &filter, page).await?))
}

/// Get one import with its full task state and messages.
pub async fn retrieve(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path(task_id): Path<String>,
) -> Result<Json<ImportTaskDetail>, HttpError> {
    Ok(Json(state.core.imports().get(&caller, &task_id).await?))
}
