//! Durable key/value backing store contract and implementations.
//!
//! # Responsibility
//! - Define the synchronous string-keyed persistence surface used by all
//!   entity stores (one JSON blob per reserved collection key).
//! - Provide a SQLite-backed durable implementation and an in-memory
//!   implementation for tests and ephemeral embedding.
//!
//! # Invariants
//! - `set` followed by `get` on the same key returns the exact value written.
//! - Keys are never invented by this layer; each collection owns one fixed key.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
pub mod migrations;
mod sqlite;

pub use memory::MemoryBackingStore;
pub use sqlite::{open_store, open_store_in_memory, SqliteBackingStore};

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence-layer error for backing store operations.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Synchronous string-keyed durable store.
///
/// The running application backs this with browser-profile storage; here the
/// durable implementation is SQLite. Values are opaque JSON text; this layer
/// never inspects them.
pub trait BackingStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// A write that returns `Err` (e.g. quota or I/O failure in the durable
    /// backend) is fatal for the calling mutation; there is no retry here.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
