//! Bookmark Handlers

use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::with_max_age;
use crate::application::dto::{
    BookmarkExistsQuery, CreateBookmarkRequest, UpdateBookmarkRequest,
};
use crate::domain::Bookmark;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Bookmark lists may be cached downstream for 30 minutes
pub const LIST_MAX_AGE: Duration = Duration::from_secs(30 * 60);

/// Existence checks may be cached downstream for 5 minutes
pub const EXISTS_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// List a user's bookmarks
pub async fn list_user_bookmarks(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    let bookmarks = state.bookmarks.list_by_user(&user_id).await?;
    Ok(with_max_age(LIST_MAX_AGE, Json(bookmarks)))
}

/// List bookmarks of a resource
pub async fn list_resource_bookmarks(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Result<Response, AppError> {
    let bookmarks = state.bookmarks.list_by_resource(&resource_id).await?;
    Ok(with_max_age(LIST_MAX_AGE, Json(bookmarks)))
}

/// List bookmarks carrying a tag
pub async fn list_tagged_bookmarks(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Response, AppError> {
    let bookmarks = state.bookmarks.list_by_tag(&tag).await?;
    Ok(with_max_age(LIST_MAX_AGE, Json(bookmarks)))
}

/// Check whether a user has bookmarked a resource
pub async fn check_bookmark_exists(
    State(state): State<AppState>,
    Query(query): Query<BookmarkExistsQuery>,
) -> Result<Response, AppError> {
    let exists = state
        .bookmarks
        .exists(&query.user_id, &query.resource_id)
        .await?;
    Ok(with_max_age(EXISTS_MAX_AGE, Json(exists)))
}

/// Create a bookmark
pub async fn create_bookmark(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), AppError> {
    let bookmark = state.bookmarks.create(body.into()).await?;

    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// Replace title, note and tags of a bookmark
pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateBookmarkRequest>,
) -> Result<Json<Bookmark>, AppError> {
    let bookmark = state.bookmarks.update(&id, body.into()).await?;

    Ok(Json(bookmark))
}

/// Delete a bookmark by ID
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.bookmarks.delete_by_id(&id).await?;
    Ok(StatusCode::OK)
}

/// Delete the bookmark of a (user, resource) pair
pub async fn delete_user_resource_bookmark(
    State(state): State<AppState>,
    Path((user_id, resource_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state
        .bookmarks
        .delete_by_user_and_resource(&user_id, &resource_id)
        .await?;
    Ok(StatusCode::OK)
}
