//! Data Transfer Objects
//!
//! DTOs for API request serialization. Responses serialize the domain
//! entities directly.

pub mod request;

pub use request::{
    BookmarkExistsQuery, CreateBookmarkRequest, UpdateBookmarkRequest, UpsertConnectionsRequest,
};
