//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **BookmarkService**: bookmark lookup, creation with uniqueness check, edit, delete
//! - **UserConnectionService**: friend-list retrieval, merge-on-write, unfriend

pub mod bookmark_service;
pub mod user_connection_service;

// Re-export bookmark service types
pub use bookmark_service::{
    BookmarkError, BookmarkService, BookmarkServiceImpl, CreateBookmarkDto, UpdateBookmarkDto,
};

// Re-export user connection service types
pub use user_connection_service::{
    ConnectionError, UserConnectionService, UserConnectionServiceImpl,
};
