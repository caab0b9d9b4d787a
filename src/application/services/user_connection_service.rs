//! User Connection Service
//!
//! Handles per-user friend lists. Posting friends for a user either creates
//! their document or appends to it; unfriending removes one occurrence.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ConnectionUpsert, UserConnection, UserConnectionRepository};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// User connection service trait
#[async_trait]
pub trait UserConnectionService: Send + Sync {
    /// Get a user's connection document
    async fn get_connections(&self, user_id: &str) -> Result<UserConnection, ConnectionError>;

    /// Append friends to a user's document, creating it on first use
    async fn upsert_connections(
        &self,
        user_id: String,
        friend_ids: Vec<String>,
    ) -> Result<ConnectionUpsert, ConnectionError>;

    /// Remove one occurrence of a friend from a user's document
    async fn unfriend(&self, user_id: &str, friend_id: &str) -> Result<(), ConnectionError>;
}

/// User connection service errors
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("User connections not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for ConnectionError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => ConnectionError::NotFound,
            e => ConnectionError::Internal(e.to_string()),
        }
    }
}

impl From<ConnectionError> for AppError {
    fn from(err: ConnectionError) -> Self {
        match err {
            ConnectionError::NotFound => AppError::NotFound("User connections not found".into()),
            ConnectionError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// UserConnectionService implementation
pub struct UserConnectionServiceImpl<C>
where
    C: UserConnectionRepository,
{
    connection_repo: Arc<C>,
    ids: Arc<SnowflakeGenerator>,
}

impl<C> UserConnectionServiceImpl<C>
where
    C: UserConnectionRepository,
{
    pub fn new(connection_repo: Arc<C>, ids: Arc<SnowflakeGenerator>) -> Self {
        Self {
            connection_repo,
            ids,
        }
    }
}

#[async_trait]
impl<C> UserConnectionService for UserConnectionServiceImpl<C>
where
    C: UserConnectionRepository + 'static,
{
    async fn get_connections(&self, user_id: &str) -> Result<UserConnection, ConnectionError> {
        self.connection_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(ConnectionError::NotFound)
    }

    async fn upsert_connections(
        &self,
        user_id: String,
        friend_ids: Vec<String>,
    ) -> Result<ConnectionUpsert, ConnectionError> {
        let added = friend_ids.len();
        let candidate = UserConnection {
            id: self.ids.generate_id(),
            user_id,
            friend_ids,
        };

        let upsert = self.connection_repo.append_friends(&candidate).await?;

        tracing::info!(
            user_id = %upsert.connection.user_id,
            added,
            total = upsert.connection.friend_ids.len(),
            created = upsert.created,
            "User connections saved"
        );

        Ok(upsert)
    }

    async fn unfriend(&self, user_id: &str, friend_id: &str) -> Result<(), ConnectionError> {
        let connection = self
            .connection_repo
            .remove_friend(user_id, friend_id)
            .await?
            .ok_or(ConnectionError::NotFound)?;

        tracing::info!(
            user_id = %user_id,
            friend_id = %friend_id,
            remaining = connection.friend_ids.len(),
            "Friend removed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockUserConnectionRepository;
    use crate::shared::snowflake::DEFAULT_EPOCH;
    use pretty_assertions::assert_eq;

    fn service(
        repo: MockUserConnectionRepository,
    ) -> UserConnectionServiceImpl<MockUserConnectionRepository> {
        UserConnectionServiceImpl::new(
            Arc::new(repo),
            Arc::new(SnowflakeGenerator::new(1, DEFAULT_EPOCH)),
        )
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let mut repo = MockUserConnectionRepository::new();
        repo.expect_find_by_user_id().returning(|_| Ok(None));

        let err = service(repo).get_connections("nouser").await.unwrap_err();
        assert!(matches!(err, ConnectionError::NotFound));
    }

    #[tokio::test]
    async fn test_upsert_passes_fresh_candidate() {
        let mut repo = MockUserConnectionRepository::new();
        repo.expect_append_friends()
            .withf(|c| c.user_id == "u1" && c.friend_ids == ["f1", "f2"] && !c.id.is_empty())
            .times(1)
            .returning(|c| {
                Ok(ConnectionUpsert {
                    connection: c.clone(),
                    created: true,
                })
            });

        let upsert = service(repo)
            .upsert_connections("u1".into(), vec!["f1".into(), "f2".into()])
            .await
            .unwrap();

        assert!(upsert.created);
        assert_eq!(upsert.connection.friend_ids, vec!["f1", "f2"]);
    }

    #[tokio::test]
    async fn test_upsert_reports_merge() {
        let mut repo = MockUserConnectionRepository::new();
        repo.expect_append_friends().returning(|c| {
            Ok(ConnectionUpsert {
                connection: UserConnection {
                    id: "existing".into(),
                    user_id: c.user_id.clone(),
                    friend_ids: vec!["f1".into(), "f2".into()],
                },
                created: false,
            })
        });

        let upsert = service(repo)
            .upsert_connections("u1".into(), vec!["f2".into()])
            .await
            .unwrap();

        assert!(!upsert.created);
        assert_eq!(upsert.connection.id, "existing");
    }

    #[tokio::test]
    async fn test_unfriend_missing_user_is_not_found() {
        let mut repo = MockUserConnectionRepository::new();
        repo.expect_remove_friend().returning(|_, _| Ok(None));

        let err = service(repo).unfriend("nouser", "f1").await.unwrap_err();
        assert!(matches!(err, ConnectionError::NotFound));
    }

    #[tokio::test]
    async fn test_unfriend_absent_friend_succeeds() {
        let mut repo = MockUserConnectionRepository::new();
        repo.expect_remove_friend()
            .withf(|user_id, friend_id| user_id == "u1" && friend_id == "ghost")
            .returning(|user_id, _| {
                Ok(Some(UserConnection {
                    id: "1".into(),
                    user_id: user_id.to_string(),
                    friend_ids: vec!["f1".into()],
                }))
            });

        service(repo).unfriend("u1", "ghost").await.unwrap();
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let mut repo = MockUserConnectionRepository::new();
        repo.expect_find_by_user_id()
            .returning(|_| Err(AppError::Internal("timeout".into())));

        let err = service(repo).get_connections("u1").await.unwrap_err();
        assert!(matches!(err, ConnectionError::Internal(_)));
    }
}
