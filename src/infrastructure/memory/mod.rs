//! In-Memory Store
//!
//! Process-local implementations of the domain repository traits, backed by
//! `DashMap`. Used by tests and for running the service without PostgreSQL.
//! Contents are lost on restart.

mod bookmark_store;
mod connection_store;

use std::sync::Arc;

pub use bookmark_store::MemoryBookmarkRepository;
pub use connection_store::MemoryUserConnectionRepository;

/// Both in-memory repositories, shared by every clone.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub bookmarks: Arc<MemoryBookmarkRepository>,
    pub connections: Arc<MemoryUserConnectionRepository>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
