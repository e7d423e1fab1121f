//! Handler for mapping removal.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /{alias}`
///
/// # Behavior
///
/// Idempotent: returns 204 No Content whether or not the alias existed.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store fails.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.alias_service.delete_mapping(&alias).await?;

    Ok(StatusCode::NO_CONTENT)
}
