//! UserConnection Repository Implementation
//!
//! PostgreSQL implementation of the UserConnectionRepository trait.
//! Appends are a single upsert statement; removals lock the row for the
//! duration of the read-modify-write.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{ConnectionUpsert, UserConnection, UserConnectionRepository};
use crate::infrastructure::metrics::QueryTimer;
use crate::shared::error::AppError;

const TABLE: &str = "user_connections";

/// Database row representation matching the user_connections table schema.
#[derive(Debug, sqlx::FromRow)]
struct UserConnectionRow {
    id: String,
    user_id: String,
    friend_ids: Vec<String>,
}

impl From<UserConnectionRow> for UserConnection {
    fn from(row: UserConnectionRow) -> Self {
        UserConnection {
            id: row.id,
            user_id: row.user_id,
            friend_ids: row.friend_ids,
        }
    }
}

/// Upsert result row; `inserted` is derived from the system column `xmax`,
/// which is zero only for a freshly inserted tuple.
#[derive(Debug, sqlx::FromRow)]
struct UpsertRow {
    id: String,
    user_id: String,
    friend_ids: Vec<String>,
    inserted: bool,
}

/// PostgreSQL user connection repository implementation.
#[derive(Clone)]
pub struct PgUserConnectionRepository {
    pool: PgPool,
}

impl PgUserConnectionRepository {
    /// Create a new PgUserConnectionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserConnectionRepository for PgUserConnectionRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserConnection>, AppError> {
        let _timer = QueryTimer::start("find_by_user_id", TABLE);

        let row = sqlx::query_as::<_, UserConnectionRow>(
            r#"
            SELECT id, user_id, friend_ids
            FROM user_connections
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserConnection::from))
    }

    async fn append_friends(
        &self,
        candidate: &UserConnection,
    ) -> Result<ConnectionUpsert, AppError> {
        let _timer = QueryTimer::start("append_friends", TABLE);

        let row = sqlx::query_as::<_, UpsertRow>(
            r#"
            INSERT INTO user_connections (id, user_id, friend_ids)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE
            SET friend_ids = user_connections.friend_ids || EXCLUDED.friend_ids
            RETURNING id, user_id, friend_ids, (xmax = 0) AS inserted
            "#,
        )
        .bind(&candidate.id)
        .bind(&candidate.user_id)
        .bind(&candidate.friend_ids)
        .fetch_one(&self.pool)
        .await?;

        Ok(ConnectionUpsert {
            created: row.inserted,
            connection: UserConnection {
                id: row.id,
                user_id: row.user_id,
                friend_ids: row.friend_ids,
            },
        })
    }

    async fn remove_friend(
        &self,
        user_id: &str,
        friend_id: &str,
    ) -> Result<Option<UserConnection>, AppError> {
        let _timer = QueryTimer::start("remove_friend", TABLE);

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserConnectionRow>(
            r#"
            SELECT id, user_id, friend_ids
            FROM user_connections
            WHERE user_id = $1
            FOR UPDATE
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut connection = UserConnection::from(row);
        if !connection.remove_friend(friend_id) {
            // Nothing to write back; dropping the transaction releases the lock.
            return Ok(Some(connection));
        }

        sqlx::query("UPDATE user_connections SET friend_ids = $2 WHERE id = $1")
            .bind(&connection.id)
            .bind(&connection.friend_ids)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(connection))
    }
}
