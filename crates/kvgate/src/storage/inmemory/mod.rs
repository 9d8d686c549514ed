//! In-memory storage backend.
//!
//! Stores records in a `HashMap` wrapped in `Arc<RwLock<_>>`. Data is lost
//! when the last clone of the store is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use kvgate::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! store.put("w", "yada yada").await?;
//! ```

mod store;

pub use store::InMemoryStore;
