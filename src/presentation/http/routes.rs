//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    http::header,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // route_layer so the matched route template is available as the metrics label
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics::gather_metrics(),
    )
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bookmarks", bookmark_routes())
        .nest("/userConnections", user_connection_routes())
}

/// Bookmark routes
fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::bookmark::create_bookmark))
        .route("/check", get(handlers::bookmark::check_bookmark_exists))
        .route(
            "/resource/{resource_id}",
            get(handlers::bookmark::list_resource_bookmarks),
        )
        .route("/tags/{tag}", get(handlers::bookmark::list_tagged_bookmarks))
        .route(
            "/user/{user_id}/resource/{resource_id}",
            delete(handlers::bookmark::delete_user_resource_bookmark),
        )
        // GET takes a user ID here; PUT and DELETE take a bookmark ID
        .route(
            "/{id}",
            get(handlers::bookmark::list_user_bookmarks)
                .put(handlers::bookmark::update_bookmark)
                .delete(handlers::bookmark::delete_bookmark),
        )
}

/// User connection routes
fn user_connection_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::user_connection::upsert_user_connections))
        .route(
            "/{user_id}",
            get(handlers::user_connection::get_user_connections),
        )
        .route(
            "/{user_id}/friends/{friend_id}",
            delete(handlers::user_connection::unfriend),
        )
}
