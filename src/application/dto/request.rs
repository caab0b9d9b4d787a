//! Request DTOs
//!
//! Data structures for API request bodies and query strings. Field names
//! are camelCase on the wire.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{CreateBookmarkDto, UpdateBookmarkDto};

/// Create bookmark request.
///
/// Any `id` or `createdAt` sent by the client is ignored; both are assigned
/// by the server.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkRequest {
    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "resourceId must not be empty"))]
    pub resource_id: String,

    pub resource_type: Option<String>,

    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Note must be at most 2000 characters"))]
    pub note: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreateBookmarkRequest> for CreateBookmarkDto {
    fn from(req: CreateBookmarkRequest) -> Self {
        Self {
            user_id: req.user_id,
            resource_id: req.resource_id,
            resource_type: req.resource_type,
            title: req.title,
            note: req.note,
            tags: req.tags,
        }
    }
}

/// Update bookmark request. Omitted fields are cleared.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookmarkRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Note must be at most 2000 characters"))]
    pub note: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<UpdateBookmarkRequest> for UpdateBookmarkDto {
    fn from(req: UpdateBookmarkRequest) -> Self {
        Self {
            title: req.title,
            note: req.note,
            tags: req.tags,
        }
    }
}

/// `?userId=..&resourceId=..`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkExistsQuery {
    pub user_id: String,
    pub resource_id: String,
}

/// Create-or-append user connections request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertConnectionsRequest {
    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: String,

    #[serde(default)]
    pub friend_ids: Vec<String>,
}
