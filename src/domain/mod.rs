//! # Domain Layer
//!
//! Core entities of the bookmark service and the repository contracts the
//! infrastructure layer implements.
//!
//! ## Structure
//!
//! - **entities**: Bookmark and UserConnection documents plus their repository traits
//!
//! The domain layer has no knowledge of HTTP or of a particular store.

pub mod entities;

// Re-export commonly used types
pub use entities::*;
