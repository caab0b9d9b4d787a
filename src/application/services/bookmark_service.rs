//! Bookmark Service
//!
//! Handles bookmark lookup and lifecycle. A (user, resource) pair may hold at
//! most one bookmark; creation checks for an existing one first and the
//! store rejects any duplicate that slips past the check.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Bookmark, BookmarkRepository};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Bookmark service trait
#[async_trait]
pub trait BookmarkService: Send + Sync {
    /// All bookmarks of a user (empty if none)
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Bookmark>, BookmarkError>;

    /// All bookmarks pointing at a resource
    async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<Bookmark>, BookmarkError>;

    /// All bookmarks carrying a tag
    async fn list_by_tag(&self, tag: &str) -> Result<Vec<Bookmark>, BookmarkError>;

    /// Whether the user has bookmarked the resource
    async fn exists(&self, user_id: &str, resource_id: &str) -> Result<bool, BookmarkError>;

    /// Create a bookmark, stamping its ID and creation time
    async fn create(&self, new: CreateBookmarkDto) -> Result<Bookmark, BookmarkError>;

    /// Overwrite title, note and tags
    async fn update(&self, id: &str, update: UpdateBookmarkDto) -> Result<Bookmark, BookmarkError>;

    /// Delete a bookmark by ID
    async fn delete_by_id(&self, id: &str) -> Result<(), BookmarkError>;

    /// Delete the bookmark of a (user, resource) pair
    async fn delete_by_user_and_resource(
        &self,
        user_id: &str,
        resource_id: &str,
    ) -> Result<(), BookmarkError>;
}

/// New bookmark input
#[derive(Debug, Clone, Default)]
pub struct CreateBookmarkDto {
    pub user_id: String,
    pub resource_id: String,
    pub resource_type: Option<String>,
    pub title: Option<String>,
    pub note: Option<String>,
    pub tags: Vec<String>,
}

/// Replacement values for the mutable fields of a bookmark
#[derive(Debug, Clone, Default)]
pub struct UpdateBookmarkDto {
    pub title: Option<String>,
    pub note: Option<String>,
    pub tags: Vec<String>,
}

/// Bookmark service errors
#[derive(Debug, thiserror::Error)]
pub enum BookmarkError {
    #[error("Bookmark not found")]
    NotFound,

    #[error("Bookmark already exists for this user and resource")]
    AlreadyExists,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for BookmarkError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => BookmarkError::NotFound,
            AppError::Conflict(_) => BookmarkError::AlreadyExists,
            e => BookmarkError::Internal(e.to_string()),
        }
    }
}

impl From<BookmarkError> for AppError {
    fn from(err: BookmarkError) -> Self {
        match err {
            BookmarkError::NotFound => AppError::NotFound("Bookmark not found".into()),
            BookmarkError::AlreadyExists => AppError::Conflict(
                "Bookmark already exists for this user and resource".into(),
            ),
            BookmarkError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// BookmarkService implementation
pub struct BookmarkServiceImpl<R>
where
    R: BookmarkRepository,
{
    bookmark_repo: Arc<R>,
    ids: Arc<SnowflakeGenerator>,
}

impl<R> BookmarkServiceImpl<R>
where
    R: BookmarkRepository,
{
    pub fn new(bookmark_repo: Arc<R>, ids: Arc<SnowflakeGenerator>) -> Self {
        Self { bookmark_repo, ids }
    }
}

#[async_trait]
impl<R> BookmarkService for BookmarkServiceImpl<R>
where
    R: BookmarkRepository + 'static,
{
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        Ok(self.bookmark_repo.find_by_user_id(user_id).await?)
    }

    async fn list_by_resource(&self, resource_id: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        Ok(self.bookmark_repo.find_by_resource_id(resource_id).await?)
    }

    async fn list_by_tag(&self, tag: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        Ok(self.bookmark_repo.find_by_tag(tag).await?)
    }

    async fn exists(&self, user_id: &str, resource_id: &str) -> Result<bool, BookmarkError> {
        Ok(self
            .bookmark_repo
            .exists_by_user_and_resource(user_id, resource_id)
            .await?)
    }

    async fn create(&self, new: CreateBookmarkDto) -> Result<Bookmark, BookmarkError> {
        let taken = self
            .bookmark_repo
            .exists_by_user_and_resource(&new.user_id, &new.resource_id)
            .await?;

        if taken {
            tracing::debug!(
                user_id = %new.user_id,
                resource_id = %new.resource_id,
                "Bookmark already exists"
            );
            return Err(BookmarkError::AlreadyExists);
        }

        let bookmark = Bookmark {
            id: self.ids.generate_id(),
            user_id: new.user_id,
            resource_id: new.resource_id,
            resource_type: new.resource_type,
            title: new.title,
            note: new.note,
            tags: new.tags,
            created_at: Utc::now(),
        };

        let saved = self.bookmark_repo.create(&bookmark).await?;

        tracing::info!(
            bookmark_id = %saved.id,
            user_id = %saved.user_id,
            resource_id = %saved.resource_id,
            "Bookmark created"
        );

        Ok(saved)
    }

    async fn update(&self, id: &str, update: UpdateBookmarkDto) -> Result<Bookmark, BookmarkError> {
        let mut bookmark = self
            .bookmark_repo
            .find_by_id(id)
            .await?
            .ok_or(BookmarkError::NotFound)?;

        bookmark.apply_edit(update.title, update.note, update.tags);

        let saved = self.bookmark_repo.update(&bookmark).await?;
        tracing::info!(bookmark_id = %saved.id, "Bookmark updated");

        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), BookmarkError> {
        self.bookmark_repo.delete(id).await?;
        tracing::info!(bookmark_id = %id, "Bookmark deleted");
        Ok(())
    }

    async fn delete_by_user_and_resource(
        &self,
        user_id: &str,
        resource_id: &str,
    ) -> Result<(), BookmarkError> {
        let bookmark = self
            .bookmark_repo
            .find_by_user_and_resource(user_id, resource_id)
            .await?
            .ok_or(BookmarkError::NotFound)?;

        self.bookmark_repo.delete(&bookmark.id).await?;
        tracing::info!(
            bookmark_id = %bookmark.id,
            user_id = %user_id,
            resource_id = %resource_id,
            "Bookmark deleted"
        );

        Ok(())
    }
}
