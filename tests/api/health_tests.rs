//! Health Check and Metrics API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_store() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["backend"], "memory");
}

#[tokio::test]
async fn test_metrics_label_by_route_template() {
    let app = TestApp::new();
    app.server.get("/api/bookmarks/some-user").await;

    let response = app.server.get("/metrics").await;

    response.assert_status(StatusCode::OK);
    let text = response.text();
    assert!(text.contains("bookmark_service_http_requests_total"));
    assert!(text.contains("/api/bookmarks/{id}"));
    assert!(!text.contains("some-user"));
}
