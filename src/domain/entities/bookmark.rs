//! Bookmark entity and repository trait.
//!
//! Maps to the `bookmarks` table:
//! - id: TEXT PRIMARY KEY (Snowflake ID)
//! - user_id, resource_id: TEXT NOT NULL, UNIQUE (user_id, resource_id)
//! - resource_type, title, note: TEXT NULL
//! - tags: TEXT[] NOT NULL
//! - created_at: TIMESTAMPTZ NOT NULL

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A user's saved reference to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Snowflake ID (primary key)
    pub id: String,

    /// Owner of the bookmark
    pub user_id: String,

    /// The bookmarked resource
    pub resource_id: String,

    /// Kind of resource, e.g. "post"
    pub resource_type: Option<String>,

    pub title: Option<String>,

    pub note: Option<String>,

    /// Ordered, free-form tags
    pub tags: Vec<String>,

    /// Assigned once at creation
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Whether this bookmark belongs to the given (user, resource) pair.
    pub fn is_for(&self, user_id: &str, resource_id: &str) -> bool {
        self.user_id == user_id && self.resource_id == resource_id
    }

    /// Exact element match against the tag list.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Overwrite the mutable fields. Identity, ownership and creation time
    /// are never touched.
    pub fn apply_edit(&mut self, title: Option<String>, note: Option<String>, tags: Vec<String>) {
        self.title = title;
        self.note = note;
        self.tags = tags;
    }
}

/// Repository trait for Bookmark data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Find a bookmark by its ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Bookmark>, AppError>;

    /// All bookmarks owned by a user, oldest first.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Bookmark>, AppError>;

    /// All bookmarks pointing at a resource, oldest first.
    async fn find_by_resource_id(&self, resource_id: &str) -> Result<Vec<Bookmark>, AppError>;

    /// All bookmarks whose tag list contains `tag`.
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Bookmark>, AppError>;

    /// The bookmark for a (user, resource) pair, if any.
    async fn find_by_user_and_resource(
        &self,
        user_id: &str,
        resource_id: &str,
    ) -> Result<Option<Bookmark>, AppError>;

    /// Whether a bookmark exists for a (user, resource) pair.
    async fn exists_by_user_and_resource(
        &self,
        user_id: &str,
        resource_id: &str,
    ) -> Result<bool, AppError>;

    /// Insert a new bookmark.
    ///
    /// Returns `AppError::Conflict` if the (user, resource) pair is taken.
    async fn create(&self, bookmark: &Bookmark) -> Result<Bookmark, AppError>;

    /// Persist title, note and tags of an existing bookmark.
    ///
    /// Returns `AppError::NotFound` if the ID does not resolve.
    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, AppError>;

    /// Delete a bookmark by ID.
    ///
    /// Returns `AppError::NotFound` if the ID does not resolve.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
