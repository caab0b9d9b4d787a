//! DashMap-backed bookmark storage.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{Bookmark, BookmarkRepository};
use crate::shared::error::AppError;

/// In-memory bookmark repository.
///
/// The (user, resource) index doubles as the uniqueness constraint: a
/// bookmark is only inserted while its index entry is held vacant.
#[derive(Default)]
pub struct MemoryBookmarkRepository {
    /// Bookmarks by ID
    bookmarks: DashMap<String, Bookmark>,
    /// (user_id, resource_id) to bookmark ID
    by_pair: DashMap<(String, String), String>,
}

impl MemoryBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect<F>(&self, predicate: F) -> Vec<Bookmark>
    where
        F: Fn(&Bookmark) -> bool,
    {
        let mut found: Vec<Bookmark> = self
            .bookmarks
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        found
    }

    fn pair_key(user_id: &str, resource_id: &str) -> (String, String) {
        (user_id.to_owned(), resource_id.to_owned())
    }
}

#[async_trait]
impl BookmarkRepository for MemoryBookmarkRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Bookmark>, AppError> {
        Ok(self.bookmarks.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Bookmark>, AppError> {
        Ok(self.collect(|b| b.user_id == user_id))
    }

    async fn find_by_resource_id(&self, resource_id: &str) -> Result<Vec<Bookmark>, AppError> {
        Ok(self.collect(|b| b.resource_id == resource_id))
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Bookmark>, AppError> {
        Ok(self.collect(|b| b.has_tag(tag)))
    }

    async fn find_by_user_and_resource(
        &self,
        user_id: &str,
        resource_id: &str,
    ) -> Result<Option<Bookmark>, AppError> {
        let id = match self.by_pair.get(&Self::pair_key(user_id, resource_id)) {
            Some(entry) => entry.value().clone(),
            None => return Ok(None),
        };
        Ok(self.bookmarks.get(&id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_user_and_resource(
        &self,
        user_id: &str,
        resource_id: &str,
    ) -> Result<bool, AppError> {
        Ok(self
            .by_pair
            .contains_key(&Self::pair_key(user_id, resource_id)))
    }

    async fn create(&self, bookmark: &Bookmark) -> Result<Bookmark, AppError> {
        match self
            .by_pair
            .entry(Self::pair_key(&bookmark.user_id, &bookmark.resource_id))
        {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "Bookmark for user {} and resource {} already exists",
                bookmark.user_id, bookmark.resource_id
            ))),
            Entry::Vacant(slot) => {
                if self.bookmarks.contains_key(&bookmark.id) {
                    return Err(AppError::Conflict(format!(
                        "Bookmark with id {} already exists",
                        bookmark.id
                    )));
                }
                self.bookmarks.insert(bookmark.id.clone(), bookmark.clone());
                slot.insert(bookmark.id.clone());
                Ok(bookmark.clone())
            }
        }
    }

    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, AppError> {
        let mut stored = self.bookmarks.get_mut(&bookmark.id).ok_or_else(|| {
            AppError::NotFound(format!("Bookmark with id {} not found", bookmark.id))
        })?;

        stored.apply_edit(
            bookmark.title.clone(),
            bookmark.note.clone(),
            bookmark.tags.clone(),
        );
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let not_found = || AppError::NotFound(format!("Bookmark with id {} not found", id));

        let key = match self.bookmarks.get(id) {
            Some(entry) => Self::pair_key(&entry.user_id, &entry.resource_id),
            None => return Err(not_found()),
        };

        // Same lock order as create: pair index first, then the row.
        match self.by_pair.entry(key) {
            Entry::Occupied(slot) if slot.get() == id => {
                self.bookmarks.remove(id);
                slot.remove();
                Ok(())
            }
            _ => Err(not_found()),
        }
    }
}
