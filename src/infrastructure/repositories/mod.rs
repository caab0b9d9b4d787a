//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **BookmarkRepository** - bookmarks, with (user, resource) uniqueness backed by an index
//! - **UserConnectionRepository** - per-user friend lists, merged atomically
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgBookmarkRepository, PgUserConnectionRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let bookmark_repo = PgBookmarkRepository::new(pool.clone());
//!     let connection_repo = PgUserConnectionRepository::new(pool);
//! }
//! ```

pub mod bookmark_repository;
pub mod user_connection_repository;

pub use bookmark_repository::PgBookmarkRepository;
pub use user_connection_repository::PgUserConnectionRepository;
