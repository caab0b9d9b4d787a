//! User Connection Handlers

use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::with_max_age;
use crate::application::dto::UpsertConnectionsRequest;
use crate::domain::UserConnection;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Connection documents may be cached downstream for 5 minutes
pub const CONNECTIONS_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// Get a user's connections
pub async fn get_user_connections(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    let connection = state.connections.get_connections(&user_id).await?;
    Ok(with_max_age(CONNECTIONS_MAX_AGE, Json(connection)))
}

/// Create a user's connection document or append to it.
///
/// 201 when the document was created, 200 when friends were appended.
pub async fn upsert_user_connections(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpsertConnectionsRequest>,
) -> Result<(StatusCode, Json<UserConnection>), AppError> {
    let upsert = state
        .connections
        .upsert_connections(body.user_id, body.friend_ids)
        .await?;

    let status = if upsert.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(upsert.connection)))
}

/// Remove a friend from a user's connections
pub async fn unfriend(
    State(state): State<AppState>,
    Path((user_id, friend_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.connections.unfriend(&user_id, &friend_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
