//! UserConnection entity and repository trait.
//!
//! Maps to the `user_connections` table:
//! - id: TEXT PRIMARY KEY (Snowflake ID)
//! - user_id: TEXT NOT NULL UNIQUE
//! - friend_ids: TEXT[] NOT NULL
//!
//! Connections are one-directional: a user's document says nothing about
//! whether the friend lists them back.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Per-user list of friend IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConnection {
    /// Snowflake ID (primary key)
    pub id: String,

    /// One document per user
    pub user_id: String,

    /// Append order is preserved; duplicates are kept.
    pub friend_ids: Vec<String>,
}

impl UserConnection {
    /// Append friend IDs in the given order, without deduplication.
    pub fn add_friends(&mut self, friend_ids: &[String]) {
        self.friend_ids.extend_from_slice(friend_ids);
    }

    /// Remove the first occurrence of `friend_id`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_friend(&mut self, friend_id: &str) -> bool {
        match self.friend_ids.iter().position(|f| f == friend_id) {
            Some(index) => {
                self.friend_ids.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Outcome of an append-or-create on a user's connection document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionUpsert {
    pub connection: UserConnection,
    /// True when no document existed and `connection` was newly inserted.
    pub created: bool,
}

/// Repository trait for UserConnection data access operations.
///
/// The two mutating operations are atomic per user: concurrent calls for
/// the same `user_id` never lose each other's changes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserConnectionRepository: Send + Sync {
    /// Find the connection document of a user.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserConnection>, AppError>;

    /// Append `candidate.friend_ids` to the existing document for
    /// `candidate.user_id`, or insert `candidate` as-is if there is none.
    async fn append_friends(&self, candidate: &UserConnection)
        -> Result<ConnectionUpsert, AppError>;

    /// Remove the first occurrence of `friend_id` from the user's document
    /// and persist it.
    ///
    /// Returns `None` if the user has no document.
    async fn remove_friend(
        &self,
        user_id: &str,
        friend_id: &str,
    ) -> Result<Option<UserConnection>, AppError>;
}
