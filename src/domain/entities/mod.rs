//! # Domain Entities
//!
//! - **Bookmark**: a user's saved reference to a resource, with note and tags
//! - **UserConnection**: a per-user document listing the IDs of that user's friends
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer
//! (PostgreSQL and in-memory).

mod bookmark;
mod user_connection;

pub use bookmark::{Bookmark, BookmarkRepository};
pub use user_connection::{ConnectionUpsert, UserConnection, UserConnectionRepository};

#[cfg(test)]
pub use bookmark::MockBookmarkRepository;
#[cfg(test)]
pub use user_connection::MockUserConnectionRepository;
