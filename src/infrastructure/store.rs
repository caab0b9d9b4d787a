//! Document Store Selection
//!
//! The configured backend behind both repository families.

use sqlx::PgPool;

use crate::config::StoreBackend;
use crate::infrastructure::memory::MemoryStore;
use crate::shared::error::AppError;

/// A connected document store.
#[derive(Clone)]
pub enum Store {
    Postgres(PgPool),
    Memory(MemoryStore),
}

impl Store {
    /// A fresh, empty in-memory store.
    pub fn memory() -> Self {
        Store::Memory(MemoryStore::new())
    }

    pub fn backend(&self) -> StoreBackend {
        match self {
            Store::Postgres(_) => StoreBackend::Postgres,
            Store::Memory(_) => StoreBackend::Memory,
        }
    }

    /// Round-trip to the store to confirm it can serve requests.
    pub async fn ping(&self) -> Result<(), AppError> {
        match self {
            Store::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
            Store::Memory(_) => Ok(()),
        }
    }
}
