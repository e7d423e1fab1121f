mod common;

use axum_test::TestServer;
use serde_json::json;
use std::time::Duration;
use url_alias::routes::app_routes;

fn make_server() -> TestServer {
    let (state, _store) = common::create_test_state(Some("https://s.example.com"));
    TestServer::new(app_routes(state, Duration::from_secs(4))).unwrap()
}

#[tokio::test]
async fn test_save_resolve_delete_flow() {
    let server = make_server();

    let saved = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a", "alias": "ex" }))
        .await;
    saved.assert_status_ok();
    assert_eq!(
        saved.json::<serde_json::Value>()["short_url"],
        "https://s.example.com/ex"
    );

    let redirect = server.get("/ex").await;
    redirect.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(redirect.header("location"), "https://example.com/a");

    server
        .post("/url")
        .json(&json!({ "url": "https://other.example", "alias": "ex" }))
        .await
        .assert_status(axum::http::StatusCode::CONFLICT);

    server
        .delete("/ex")
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    server.get("/ex").await.assert_status_not_found();
}

#[tokio::test]
async fn test_generated_alias_resolves() {
    let server = make_server();

    let saved = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/generated" }))
        .await
        .json::<serde_json::Value>();
    let alias = saved["alias"].as_str().unwrap();

    let redirect = server.get(&format!("/{alias}")).await;
    redirect.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(redirect.header("location"), "https://example.com/generated");
}

#[tokio::test]
async fn test_health_route() {
    let server = make_server();

    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let server = make_server();

    let response = server.get("/health").await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = make_server();

    let response = server
        .get("/missing")
        .add_header("x-request-id", "req-123")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.header("x-request-id"), "req-123");
}

#[tokio::test]
async fn test_url_with_newline_is_never_stored() {
    let server = make_server();

    server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a\nb", "alias": "nl" }))
        .await
        .assert_status_bad_request();

    server.get("/nl").await.assert_status_not_found();
}
