//! Data core for the class portal: durable per-family entity stores,
//! derived read-only views and cross-store free-text search.
//! This crate is the single source of truth for state-shape invariants.

pub mod logging;
pub mod model;
pub mod portal;
pub mod search;
pub mod sink;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{Record, RecordId};
pub use portal::Portal;
pub use search::{search_stores, SearchFamily, SearchHit, SearchResults};
pub use sink::{ActivitySink, NotificationSink, Severity};
pub use storage::{
    open_store, open_store_in_memory, BackingStore, MemoryBackingStore, SqliteBackingStore,
    StorageError,
};
pub use store::{Collection, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
