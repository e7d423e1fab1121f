//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::HeaderValue,
    response::{IntoResponse, Redirect},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Returns 307 Temporary Redirect with the stored URL in `Location`.
///
/// # Errors
///
/// - 404 Not Found if the alias doesn't exist
/// - 500 Internal Server Error if the stored URL is not a valid `Location` value
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.alias_service.resolve_alias(&alias).await?;

    // Rows written before URLs were restricted to printable ASCII.
    if HeaderValue::from_str(&url).is_err() {
        tracing::error!(alias, "stored url is not a valid Location header value");
        return Err(AppError::internal(
            "Stored URL cannot be redirected to",
            json!({ "alias": alias }),
        ));
    }

    tracing::debug!(alias, url, "redirecting");

    Ok(Redirect::temporary(&url))
}
