//! Bookmark Repository Implementation
//!
//! PostgreSQL implementation of the BookmarkRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Bookmark, BookmarkRepository};
use crate::infrastructure::metrics::QueryTimer;
use crate::shared::error::AppError;

const TABLE: &str = "bookmarks";

/// Database row representation matching the bookmarks table schema.
#[derive(Debug, sqlx::FromRow)]
struct BookmarkRow {
    id: String,
    user_id: String,
    resource_id: String,
    resource_type: Option<String>,
    title: Option<String>,
    note: Option<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<BookmarkRow> for Bookmark {
    fn from(row: BookmarkRow) -> Self {
        Bookmark {
            id: row.id,
            user_id: row.user_id,
            resource_id: row.resource_id,
            resource_type: row.resource_type,
            title: row.title,
            note: row.note,
            tags: row.tags,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL bookmark repository implementation.
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    /// Create a new PgBookmarkRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_where(
        &self,
        operation: &'static str,
        predicate: &str,
        value: &str,
    ) -> Result<Vec<Bookmark>, AppError> {
        let _timer = QueryTimer::start(operation, TABLE);

        let sql = format!(
            r#"
            SELECT id, user_id, resource_id, resource_type, title, note, tags, created_at
            FROM bookmarks
            WHERE {predicate}
            ORDER BY created_at ASC, id ASC
            "#
        );

        let rows = sqlx::query_as::<_, BookmarkRow>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Bookmark::from).collect())
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Bookmark>, AppError> {
        let _timer = QueryTimer::start("find_by_id", TABLE);

        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, user_id, resource_id, resource_type, title, note, tags, created_at
            FROM bookmarks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Bookmark::from))
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Bookmark>, AppError> {
        self.fetch_where("find_by_user_id", "user_id = $1", user_id)
            .await
    }

    async fn find_by_resource_id(&self, resource_id: &str) -> Result<Vec<Bookmark>, AppError> {
        self.fetch_where("find_by_resource_id", "resource_id = $1", resource_id)
            .await
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Bookmark>, AppError> {
        // Containment so the GIN index on tags applies
        self.fetch_where("find_by_tag", "tags @> ARRAY[$1]::TEXT[]", tag)
            .await
    }

    async fn find_by_user_and_resource(
        &self,
        user_id: &str,
        resource_id: &str,
    ) -> Result<Option<Bookmark>, AppError> {
        let _timer = QueryTimer::start("find_by_user_and_resource", TABLE);

        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, user_id, resource_id, resource_type, title, note, tags, created_at
            FROM bookmarks
            WHERE user_id = $1 AND resource_id = $2
            "#,
        )
        .bind(user_id)
        .bind(resource_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Bookmark::from))
    }

    async fn exists_by_user_and_resource(
        &self,
        user_id: &str,
        resource_id: &str,
    ) -> Result<bool, AppError> {
        let _timer = QueryTimer::start("exists_by_user_and_resource", TABLE);

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM bookmarks WHERE user_id = $1 AND resource_id = $2)",
        )
        .bind(user_id)
        .bind(resource_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, bookmark: &Bookmark) -> Result<Bookmark, AppError> {
        let _timer = QueryTimer::start("create", TABLE);

        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            INSERT INTO bookmarks (id, user_id, resource_id, resource_type, title, note, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, resource_id, resource_type, title, note, tags, created_at
            "#,
        )
        .bind(&bookmark.id)
        .bind(&bookmark.user_id)
        .bind(&bookmark.resource_id)
        .bind(&bookmark.resource_type)
        .bind(&bookmark.title)
        .bind(&bookmark.note)
        .bind(&bookmark.tags)
        .bind(bookmark.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict(format!(
                        "Bookmark for user {} and resource {} already exists",
                        bookmark.user_id, bookmark.resource_id
                    ));
                }
            }
            AppError::Database(e)
        })?;

        Ok(row.into())
    }

    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, AppError> {
        let _timer = QueryTimer::start("update", TABLE);

        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            UPDATE bookmarks
            SET title = $2,
                note = $3,
                tags = $4
            WHERE id = $1
            RETURNING id, user_id, resource_id, resource_type, title, note, tags, created_at
            "#,
        )
        .bind(&bookmark.id)
        .bind(&bookmark.title)
        .bind(&bookmark.note)
        .bind(&bookmark.tags)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bookmark with id {} not found", bookmark.id)))?;

        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = QueryTimer::start("delete", TABLE);

        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Bookmark with id {} not found", id)));
        }

        Ok(())
    }
}
