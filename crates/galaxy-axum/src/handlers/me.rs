//! Current user handler.

use axum::Json;
use axum::extract::State;
use galaxy_core::CurrentUser;

use crate::error::HttpError;
use crate::extract::Identity;
use crate::state::AppState;

/// Describe the caller and whether they hold the privileged role.
pub async fn me(
    State(state): State<AppState>,
    Identity(caller): Identity,
) -> Result<Json<CurrentUser>, HttpError> {
    Ok(Json(state.core.current_user(&caller).await?))
}
