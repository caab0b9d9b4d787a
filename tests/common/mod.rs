//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use bookmark_service::config::CorsSettings;
use bookmark_service::infrastructure::Store;
use bookmark_service::shared::snowflake::{SnowflakeGenerator, DEFAULT_EPOCH};
use bookmark_service::startup::{build_router, AppState};

/// Test application over a fresh in-memory store
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(
            Store::memory(),
            Arc::new(SnowflakeGenerator::new(1, DEFAULT_EPOCH)),
        );
        let router = build_router(
            state,
            &CorsSettings {
                allowed_origins: vec!["http://localhost:3000".into()],
            },
        );

        Self {
            server: TestServer::new(router).expect("Failed to start test server"),
        }
    }

    /// POST a bookmark and return the created body
    pub async fn create_bookmark(&self, user_id: &str, resource_id: &str, tags: &[&str]) -> Value {
        let response = self
            .server
            .post("/api/bookmarks")
            .json(&bookmark_body(user_id, resource_id, tags))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()
    }
}

/// Request body for a new bookmark
pub fn bookmark_body(user_id: &str, resource_id: &str, tags: &[&str]) -> Value {
    json!({
        "userId": user_id,
        "resourceId": resource_id,
        "resourceType": "post",
        "title": "Recipe post",
        "note": "",
        "tags": tags,
    })
}

/// Generate a unique user ID
pub fn unique_user() -> String {
    format!("user_{}", &uuid::Uuid::new_v4().to_string()[..8])
}
