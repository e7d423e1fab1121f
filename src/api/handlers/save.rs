//! Handler for the save endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Maps a long URL to a caller-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "custom"   // optional, generated when absent or empty
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "alias": "custom",
///   "url": "https://example.com",
///   "short_url": "https://s.example.com/custom"   // only when BASE_URL is set
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL or alias is invalid
/// - 409 Conflict if the alias is already taken
/// - 503 Service Unavailable if no free alias could be generated
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    payload.validate()?;

    let mapping = state
        .alias_service
        .create_mapping(&payload.url, payload.alias.as_deref())
        .await?;

    let short_url = state
        .base_url
        .as_deref()
        .map(|base_url| mapping.short_url(base_url));

    Ok(Json(SaveResponse {
        alias: mapping.alias,
        url: mapping.url,
        short_url,
    }))
}
