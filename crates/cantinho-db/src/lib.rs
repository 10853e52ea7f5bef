//! # cantinho-db
//!
//! Document store layer for the Cantinho backend.
//!
//! This crate provides:
//! - A PostgreSQL document store (JSONB bodies keyed by collection and id)
//! - An in-process document store for tests and local runs
//! - The account repository (register / login)
//! - A generic resource repository (create / list by owner / delete by id)
//! - [`Database`], which owns the single store handle and short-circuits
//!   every operation when no store is available
//!
//! ## Example
//!
//! ```rust,ignore
//! use cantinho_db::Database;
//! use cantinho_core::{Credentials, Note};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::in_memory();
//!
//!     let user_id = db.accounts()?.register(Credentials {
//!         code: "9wq1".to_string(),
//!         question_id: "q1".to_string(),
//!         answer: "Paris".to_string(),
//!     }).await?;
//!
//!     let note = db.resources::<Note>()?.create(Note {
//!         user_id,
//!         title: "Groceries".to_string(),
//!         content: "milk, eggs".to_string(),
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```
pub mod accounts;
pub mod documents;
pub mod memory;
pub mod pool;
pub mod resources;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) and the API crate's
// tests can share them
pub mod test_fixtures;

use std::sync::Arc;

// Re-export core types
pub use cantinho_core::*;

pub use accounts::AccountRepository;
pub use documents::PgDocumentStore;
pub use memory::MemoryDocumentStore;
pub use pool::{connect_pool, PoolConfig};
pub use resources::ResourceRepository;

/// Shared database context: the process-wide store handle plus the id
/// generator for created resources.
///
/// The handle is decided once at startup. When it is absent the service runs
/// degraded and every repository accessor fails with
/// [`Error::StoreUnavailable`] before any I/O is attempted.
#[derive(Clone)]
pub struct Database {
    store: Option<Arc<dyn DocumentStore>>,
    ids: Arc<dyn IdGenerator>,
}

impl Database {
    /// Use the given store with random UUID resource ids.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store: Some(store),
            ids: Arc::new(UuidIds),
        }
    }

    /// A database with no store (service-degraded mode).
    pub fn unavailable() -> Self {
        Self {
            store: None,
            ids: Arc::new(UuidIds),
        }
    }

    /// A fresh in-process store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryDocumentStore::new()))
    }

    /// Connect to PostgreSQL, running migrations when the `migrations`
    /// feature is enabled.
    pub async fn connect(url: &str, config: PoolConfig) -> Result<Self> {
        let store = PgDocumentStore::connect(url, &config).await?;

        #[cfg(feature = "migrations")]
        {
            tracing::info!(subsystem = "db", op = "migrate", "Running database migrations...");
            store.migrate().await?;
            tracing::info!(subsystem = "db", op = "migrate", "Database migrations complete");
        }

        Ok(Self::new(Arc::new(store)))
    }

    /// Replace the resource id generator.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// True unless running in service-degraded mode.
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// Name of the active backend, `None` when degraded.
    pub fn backend_name(&self) -> Option<&'static str> {
        self.store.as_ref().map(|store| store.backend_name())
    }

    /// Account operations.
    pub fn accounts(&self) -> Result<AccountRepository> {
        Ok(AccountRepository::new(self.store()?))
    }

    /// CRUD operations for resource kind `R`.
    pub fn resources<R: Resource>(&self) -> Result<ResourceRepository<R>> {
        Ok(ResourceRepository::new(self.store()?, self.ids.clone()))
    }

    fn store(&self) -> Result<Arc<dyn DocumentStore>> {
        self.store.clone().ok_or(Error::StoreUnavailable)
    }
}
