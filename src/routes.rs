//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`      - Create a mapping
//! - `GET    /{alias}`  - Redirect (public)
//! - `DELETE /{alias}`  - Delete a mapping
//! - `GET    /health`   - Store health check
//!
//! # Middleware (outermost first)
//!
//! - **Request id** - Assign `x-request-id` when missing
//! - **Tracing** - Structured request/response logging
//! - **Request id propagation** - Echo `x-request-id` on the response
//! - **Panic recovery** - Panics become 500 responses
//! - **Timeout** - Requests exceeding the configured timeout get 408
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use tower::{Layer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling a single request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state, request_timeout))
}

/// Routes plus the middleware stack, without path normalization.
pub fn app_routes(state: AppState, request_timeout: Duration) -> Router {
    api::routes::api_routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(request_id::set_layer())
            .layer(tracing::layer())
            .layer(request_id::propagate_layer())
            .layer(CatchPanicLayer::new())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            )),
    )
}
