//! In-memory `BackingStore` for tests and ephemeral embedding.

use super::{BackingStore, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Non-durable `BackingStore` over a plain map.
///
/// Single-threaded by design, matching the store's single-writer model.
#[derive(Debug, Default)]
pub struct MemoryBackingStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-loads one key, e.g. to simulate an existing durable blob.
    pub fn preload(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl BackingStore for MemoryBackingStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
