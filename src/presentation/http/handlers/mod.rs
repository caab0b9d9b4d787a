//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod bookmark;
pub mod health;
pub mod user_connection;

use std::time::Duration;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// Wrap a response body with an advisory `Cache-Control: max-age` header.
///
/// Nothing invalidates downstream caches on write.
pub(crate) fn with_max_age<T: IntoResponse>(max_age: Duration, body: T) -> Response {
    (
        [(
            header::CACHE_CONTROL,
            format!("max-age={}", max_age.as_secs()),
        )],
        body,
    )
        .into_response()
}
