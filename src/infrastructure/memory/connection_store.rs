//! DashMap-backed user connection storage.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{ConnectionUpsert, UserConnection, UserConnectionRepository};
use crate::shared::error::AppError;

/// In-memory user connection repository keyed by user ID.
///
/// Every mutation runs while holding the shard lock of the user's entry.
#[derive(Default)]
pub struct MemoryUserConnectionRepository {
    connections: DashMap<String, UserConnection>,
}

impl MemoryUserConnectionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserConnectionRepository for MemoryUserConnectionRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserConnection>, AppError> {
        Ok(self.connections.get(user_id).map(|entry| entry.value().clone()))
    }

    async fn append_friends(
        &self,
        candidate: &UserConnection,
    ) -> Result<ConnectionUpsert, AppError> {
        let upsert = match self.connections.entry(candidate.user_id.clone()) {
            Entry::Occupied(mut existing) => {
                existing.get_mut().add_friends(&candidate.friend_ids);
                ConnectionUpsert {
                    connection: existing.get().clone(),
                    created: false,
                }
            }
            Entry::Vacant(slot) => ConnectionUpsert {
                connection: slot.insert(candidate.clone()).value().clone(),
                created: true,
            },
        };
        Ok(upsert)
    }

    async fn remove_friend(
        &self,
        user_id: &str,
        friend_id: &str,
    ) -> Result<Option<UserConnection>, AppError> {
        Ok(self.connections.get_mut(user_id).map(|mut entry| {
            entry.remove_friend(friend_id);
            entry.value().clone()
        }))
    }
}
