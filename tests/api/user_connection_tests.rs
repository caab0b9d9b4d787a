//! User Connection API Tests

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

async fn upsert(app: &TestApp, user_id: &str, friend_ids: &[&str]) -> (StatusCode, Value) {
    let response = app
        .server
        .post("/api/userConnections")
        .json(&json!({ "userId": user_id, "friendIds": friend_ids }))
        .await;
    (response.status_code(), response.json::<Value>())
}

#[tokio::test]
async fn test_first_upsert_creates_then_appends() {
    let app = TestApp::new();

    let (status, created) = upsert(&app, "u1", &["f1"]).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["friendIds"], json!(["f1"]));

    let (status, merged) = upsert(&app, "u1", &["f2"]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(merged["id"], created["id"]);
    assert_eq!(merged["friendIds"], json!(["f1", "f2"]));
}

#[tokio::test]
async fn test_repeated_friend_is_kept_as_duplicate() {
    let app = TestApp::new();
    upsert(&app, "u1", &["f1"]).await;
    upsert(&app, "u1", &["f2"]).await;

    let (_, doc) = upsert(&app, "u1", &["f1"]).await;

    assert_eq!(doc["friendIds"], json!(["f1", "f2", "f1"]));
}

#[tokio::test]
async fn test_get_connections() {
    let app = TestApp::new();
    upsert(&app, "u1", &["f1", "f2"]).await;

    let response = app.server.get("/api/userConnections/u1").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.header(header::CACHE_CONTROL), "max-age=300");
    let doc = response.json::<Value>();
    assert_eq!(doc["userId"], "u1");
    assert_eq!(doc["friendIds"], json!(["f1", "f2"]));
}

#[tokio::test]
async fn test_get_missing_connections_is_not_found() {
    let app = TestApp::new();

    app.server
        .get("/api/userConnections/nouser")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unfriend_removes_friend() {
    let app = TestApp::new();
    upsert(&app, "u1", &["f1", "f2"]).await;

    app.server
        .delete("/api/userConnections/u1/friends/f1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let doc = app.server.get("/api/userConnections/u1").await.json::<Value>();
    assert_eq!(doc["friendIds"], json!(["f2"]));
}

#[tokio::test]
async fn test_unfriend_absent_friend_is_noop_success() {
    let app = TestApp::new();
    upsert(&app, "u1", &["f1", "f2"]).await;

    app.server
        .delete("/api/userConnections/u1/friends/nonexistent")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let doc = app.server.get("/api/userConnections/u1").await.json::<Value>();
    assert_eq!(doc["friendIds"], json!(["f1", "f2"]));
}

#[tokio::test]
async fn test_unfriend_missing_user_is_not_found() {
    let app = TestApp::new();

    app.server
        .delete("/api/userConnections/nouser/friends/f1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_emptied_document_survives() {
    let app = TestApp::new();
    upsert(&app, "u1", &["f1"]).await;

    app.server
        .delete("/api/userConnections/u1/friends/f1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = app.server.get("/api/userConnections/u1").await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["friendIds"], json!([]));
}

#[tokio::test]
async fn test_unfriend_is_one_directional() {
    let app = TestApp::new();
    upsert(&app, "u1", &["u2"]).await;
    upsert(&app, "u2", &["u1"]).await;

    app.server
        .delete("/api/userConnections/u1/friends/u2")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let other = app.server.get("/api/userConnections/u2").await.json::<Value>();
    assert_eq!(other["friendIds"], json!(["u1"]));
}

#[tokio::test]
async fn test_upsert_requires_user_id() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/userConnections")
        .json(&json!({ "userId": "", "friendIds": ["f1"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upsert_missing_user_id_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/userConnections")
        .json(&json!({ "friendIds": ["f1"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], 10002);
    assert!(body["message"].as_str().unwrap().contains("userId"));
}

#[tokio::test]
async fn test_upsert_null_friend_ids_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/userConnections")
        .json(&json!({ "userId": "u1", "friendIds": null }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    app.server
        .get("/api/userConnections/u1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
