//! API route configuration.

use crate::api::handlers::{delete_handler, health_handler, redirect_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /url`       - Create a mapping
/// - `GET    /health`    - Store health
/// - `GET    /{alias}`   - Redirect to the mapped URL
/// - `DELETE /{alias}`   - Delete a mapping
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler).delete(delete_handler))
}
