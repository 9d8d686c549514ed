//! Shared application state.
//!
//! Holds the storage backend behind a trait object so handlers stay
//! independent of the concrete store. The backend (and its SDK client) is
//! built once at startup and cloned cheaply into every request.

use std::sync::Arc;

use kvgate_core::storage::KeyValueStore;

use crate::storage::InMemoryStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Key-value backend used by every request.
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Creates a new AppState that takes ownership of `store`.
    pub fn with_store(store: impl KeyValueStore + 'static) -> Self {
        Self::new(Arc::new(store))
    }
}

impl Default for AppState {
    /// An empty in-memory store.
    fn default() -> Self {
        Self::with_store(InMemoryStore::new())
    }
}
