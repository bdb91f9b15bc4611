//! Integration tests for the status HTTP API.
//!
//! These tests run the full router against an in-process test server and
//! verify the exact response bodies the endpoints promise.

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use status_server::routes;

fn test_server() -> TestServer {
    TestServer::new(routes::router()).expect("Failed to start test server")
}

fn parse_timestamp(body: &Value) -> DateTime<Utc> {
    let raw = body["timestamp"]
        .as_str()
        .expect("timestamp should be a string");
    DateTime::parse_from_rfc3339(raw)
        .unwrap_or_else(|e| panic!("timestamp '{}' is not valid RFC 3339: {}", raw, e))
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_root_returns_greeting() {
    let server = test_server();

    let resp = server.get("/").await;
    resp.assert_status_ok();

    let body: Value = resp.json();
    assert_eq!(body["message"], "Hello from DevOps Pipeline!");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_root_has_exactly_three_keys() {
    let server = test_server();

    let body: Value = server.get("/").await.json();
    let obj = body.as_object().expect("root response should be an object");

    assert_eq!(obj.len(), 3);
    assert!(obj.contains_key("message"));
    assert!(obj.contains_key("version"));
    assert!(obj.contains_key("timestamp"));
}

#[tokio::test]
async fn test_root_timestamp_is_current() {
    let server = test_server();

    let before = Utc::now();
    let body: Value = server.get("/").await.json();
    let after = Utc::now();

    let timestamp = parse_timestamp(&body);
    assert!(
        timestamp >= before - chrono::Duration::seconds(5),
        "timestamp {} is before request time {}",
        timestamp,
        before
    );
    assert!(
        timestamp <= after + chrono::Duration::seconds(5),
        "timestamp {} is after response time {}",
        timestamp,
        after
    );
}

#[tokio::test]
async fn test_root_timestamps_are_non_decreasing() {
    let server = test_server();

    let first: Value = server.get("/").await.json();
    let second: Value = server.get("/").await.json();

    assert!(parse_timestamp(&second) >= parse_timestamp(&first));
}

#[tokio::test]
async fn test_health_returns_healthy() {
    let server = test_server();

    let resp = server.get("/health").await;
    resp.assert_status_ok();
    resp.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_unknown_path_returns_404() {
    let server = test_server();

    let resp = server.get("/nonexistent").await;
    resp.assert_status_not_found();
}

#[tokio::test]
async fn test_defined_routes_respond_with_json() {
    let server = test_server();

    for path in ["/", "/health"] {
        let resp = server.get(path).await;
        assert_eq!(
            resp.header("content-type"),
            "application/json",
            "unexpected content-type for {}",
            path
        );
    }
}
