mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_alias::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _store) = common::create_test_state(None);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_broken_state());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}
