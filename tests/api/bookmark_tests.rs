//! Bookmark API Tests

use axum::http::{header, StatusCode};
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{bookmark_body, unique_user, TestApp};

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|b| b["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_returns_created_with_server_fields() {
    let app = TestApp::new();
    let before = Utc::now();

    let created = app.create_bookmark("u1", "r1", &["italian"]).await;

    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(created["userId"], "u1");
    assert_eq!(created["resourceId"], "r1");
    assert_eq!(created["resourceType"], "post");
    assert_eq!(created["tags"], json!(["italian"]));

    let created_at: DateTime<Utc> = created["createdAt"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= before);
}

#[tokio::test]
async fn test_create_ignores_client_created_at() {
    let app = TestApp::new();
    let mut body = bookmark_body("u1", "r1", &[]);
    body["createdAt"] = json!("2001-01-01T00:00:00Z");
    body["id"] = json!("client-id");

    let response = app.server.post("/api/bookmarks").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Value>();
    assert_ne!(created["id"], "client-id");
    assert_ne!(created["createdAt"], "2001-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_duplicate_create_conflicts_and_leaves_store_unchanged() {
    let app = TestApp::new();
    let first = app.create_bookmark("u1", "r1", &["a"]).await;

    let response = app
        .server
        .post("/api/bookmarks")
        .json(&bookmark_body("u1", "r1", &["b"]))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let listed = app.server.get("/api/bookmarks/u1").await.json::<Value>();
    assert_eq!(ids(&listed), vec![first["id"].as_str().unwrap().to_string()]);
    assert_eq!(listed[0]["tags"], json!(["a"]));
}

#[tokio::test]
async fn test_create_requires_user_and_resource() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/bookmarks")
        .json(&json!({ "userId": "", "resourceId": "r1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], 10007);
}

#[tokio::test]
async fn test_created_bookmark_is_found_by_user_resource_and_each_tag() {
    let app = TestApp::new();
    let user = unique_user();
    let created = app.create_bookmark(&user, "r-lasagna", &["italian", "baked"]).await;
    let id = created["id"].as_str().unwrap().to_string();

    for path in [
        format!("/api/bookmarks/{user}"),
        "/api/bookmarks/resource/r-lasagna".to_string(),
        "/api/bookmarks/tags/italian".to_string(),
        "/api/bookmarks/tags/baked".to_string(),
    ] {
        let response = app.server.get(&path).await;
        response.assert_status(StatusCode::OK);
        assert_eq!(ids(&response.json::<Value>()), vec![id.clone()], "{path}");
    }

    let partial = app.server.get("/api/bookmarks/tags/ital").await.json::<Value>();
    assert!(ids(&partial).is_empty());
}

#[tokio::test]
async fn test_lists_are_cacheable_for_thirty_minutes() {
    let app = TestApp::new();

    let response = app.server.get("/api/bookmarks/nobody").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
    assert_eq!(response.header(header::CACHE_CONTROL), "max-age=1800");
}

#[tokio::test]
async fn test_exists_flips_after_create() {
    let app = TestApp::new();

    let check = || {
        app.server
            .get("/api/bookmarks/check")
            .add_query_param("userId", "u1")
            .add_query_param("resourceId", "r1")
    };

    let response = check().await;
    response.assert_status(StatusCode::OK);
    assert!(!response.json::<bool>());
    assert_eq!(response.header(header::CACHE_CONTROL), "max-age=300");

    app.create_bookmark("u1", "r1", &[]).await;

    assert!(check().await.json::<bool>());
}

#[tokio::test]
async fn test_exists_requires_both_params() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/bookmarks/check")
        .add_query_param("userId", "u1")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/api/bookmarks/does-not-exist")
        .json(&json!({ "title": "t", "note": "n", "tags": [] }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_changes_only_title_note_tags() {
    let app = TestApp::new();
    let created = app.create_bookmark("u1", "r1", &["old"]).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .server
        .put(&format!("/api/bookmarks/{id}"))
        .json(&json!({
            "userId": "someone-else",
            "resourceId": "r2",
            "title": "New title",
            "note": "New note",
            "tags": ["new", "tags"]
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["userId"], "u1");
    assert_eq!(updated["resourceId"], "r1");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["title"], "New title");
    assert_eq!(updated["note"], "New note");
    assert_eq!(updated["tags"], json!(["new", "tags"]));

    let by_old_tag = app.server.get("/api/bookmarks/tags/old").await.json::<Value>();
    assert!(ids(&by_old_tag).is_empty());
}

#[tokio::test]
async fn test_delete_by_id_twice() {
    let app = TestApp::new();
    let created = app.create_bookmark("u1", "r1", &[]).await;
    let path = format!("/api/bookmarks/{}", created["id"].as_str().unwrap());

    app.server.delete(&path).await.assert_status(StatusCode::OK);
    app.server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_by_user_and_resource() {
    let app = TestApp::new();
    app.create_bookmark("u1", "r1", &[]).await;
    app.create_bookmark("u1", "r2", &[]).await;

    app.server
        .delete("/api/bookmarks/user/u1/resource/r1")
        .await
        .assert_status(StatusCode::OK);
    app.server
        .delete("/api/bookmarks/user/u1/resource/r1")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let remaining = app.server.get("/api/bookmarks/u1").await.json::<Value>();
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["resourceId"], "r2");

    // The pair is free again
    app.create_bookmark("u1", "r1", &[]).await;
}

#[tokio::test]
async fn test_create_missing_field_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/bookmarks")
        .json(&json!({ "resourceId": "r1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], 10002);
    assert!(body["message"].as_str().unwrap().contains("userId"));
}

#[tokio::test]
async fn test_create_null_tags_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/bookmarks")
        .json(&json!({ "userId": "u1", "resourceId": "r1", "tags": null }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], 10002);

    let listed = app.server.get("/api/bookmarks/u1").await.json::<Value>();
    assert!(ids(&listed).is_empty());
}

#[tokio::test]
async fn test_update_malformed_body_is_bad_request() {
    let app = TestApp::new();
    let created = app.create_bookmark("u1", "r1", &["keep"]).await;
    let path = format!("/api/bookmarks/{}", created["id"].as_str().unwrap());

    let response = app
        .server
        .put(&path)
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let listed = app.server.get("/api/bookmarks/u1").await.json::<Value>();
    assert_eq!(listed[0]["tags"], json!(["keep"]));
}

#[tokio::test]
async fn test_validation_error_names_wire_field() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/bookmarks")
        .json(&json!({ "userId": "u1", "resourceId": "r1", "title": "x".repeat(201) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], 10007);
    assert_eq!(body["errors"][0]["field"], "title");

    let response = app
        .server
        .post("/api/bookmarks")
        .json(&json!({ "userId": "u1", "resourceId": "" }))
        .await;
    assert_eq!(response.json::<Value>()["errors"][0]["field"], "resourceId");
}
