//! Entity store layer: one write-through collection abstraction plus one
//! concrete store per entity family.
//!
//! # Responsibility
//! - Keep each family's in-memory collections and their durable JSON blobs
//!   identical after every completed mutation.
//! - Assign unique, monotonically increasing record identifiers.
//! - Fall back to built-in seed content when a durable blob is absent or
//!   corrupt (fail open, logged, never surfaced to readers).
//!
//! # Invariants
//! - A mutation is complete only once the durable write succeeded; a failed
//!   write propagates `StoreError` and may leave memory ahead of storage
//!   until the next successful persist of that collection.
//! - `update`/`remove` on an unknown identifier are silent no-ops that report
//!   `false` so callers can detect them.
//! - Deletion never cascades to records referencing the removed one.

use crate::model::{Record, RecordId};
use crate::storage::{BackingStore, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod alumni_store;
pub mod career_store;
pub mod content_store;
pub mod message_store;
pub mod progress_store;
pub mod skill_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for persistence and encoding failures.
///
/// Reads never produce this: hydration falls back to seeds and views degrade
/// to empty projections.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Current wall clock as epoch milliseconds.
///
/// Clamps to 0 for clocks before the epoch instead of failing; timestamps
/// here are recency signals, not audit-grade instants.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// One ordered, persisted collection of records for an entity family.
///
/// Owns the in-memory copy and the identifier counter; durable writes go
/// through the caller-supplied [`BackingStore`] under the collection's
/// reserved key.
#[derive(Debug)]
pub struct Collection<R: Record> {
    key: &'static str,
    records: Vec<R>,
    next_id: RecordId,
}

impl<R: Record> Collection<R> {
    /// Loads the collection from the backing store, seeding defaults when the
    /// blob is absent or does not parse.
    ///
    /// A corrupt blob is deliberately treated like an absent one: losing demo
    /// data beats refusing to start. Seeded content is persisted immediately.
    pub fn hydrate<S: BackingStore>(
        key: &'static str,
        backing: &S,
        seed: Vec<R>,
    ) -> StoreResult<Self> {
        let stored = backing.get(key)?;

        let (records, needs_persist) = match stored {
            Some(text) => match serde_json::from_str::<Vec<R>>(&text) {
                Ok(records) => {
                    info!(
                        "event=collection_hydrate module=store status=ok key={} count={}",
                        key,
                        records.len()
                    );
                    (records, false)
                }
                Err(err) => {
                    warn!(
                        "event=collection_hydrate module=store status=fallback_seed key={} error={}",
                        key, err
                    );
                    (seed, true)
                }
            },
            None => {
                info!(
                    "event=collection_hydrate module=store status=seeded key={}",
                    key
                );
                (seed, true)
            }
        };

        let max_id = records.iter().map(Record::id).max().unwrap_or(0);
        let collection = Self {
            key,
            records,
            next_id: max_id.max(now_millis()),
        };

        if needs_persist {
            collection.persist(backing)?;
        }

        Ok(collection)
    }

    /// Allocates the next identifier: wall-clock derived, strictly monotonic
    /// within this collection, never reused.
    fn alloc_id(&mut self) -> RecordId {
        self.next_id = self.next_id.max(now_millis()) + 1;
        self.next_id
    }

    /// Appends a record in memory only. The builder receives the assigned
    /// identifier. Callers must follow up with [`Collection::persist`], or
    /// use [`Collection::add`] for the write-through form.
    pub fn push(&mut self, build: impl FnOnce(RecordId) -> R) -> RecordId {
        let id = self.alloc_id();
        self.records.push(build(id));
        id
    }

    /// Mutates the matching record in memory only. Returns whether a record
    /// with `id` existed.
    pub fn mutate(&mut self, id: RecordId, apply: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                apply(record);
                true
            }
            None => false,
        }
    }

    /// Removes the matching record in memory only. Absence is a no-op.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        self.records.len() != before
    }

    /// Serializes the whole collection and writes it under the reserved key.
    pub fn persist<S: BackingStore>(&self, backing: &S) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.records)?;
        if let Err(err) = backing.set(self.key, &encoded) {
            error!(
                "event=collection_persist module=store status=error key={} error={}",
                self.key, err
            );
            return Err(err.into());
        }
        Ok(())
    }

    /// Write-through append: assigns an identifier, persists, returns the id.
    pub fn add<S: BackingStore>(
        &mut self,
        backing: &S,
        build: impl FnOnce(RecordId) -> R,
    ) -> StoreResult<RecordId> {
        let id = self.push(build);
        self.persist(backing)?;
        Ok(id)
    }

    /// Write-through update. An unknown `id` changes nothing, skips the
    /// durable write and reports `false`.
    pub fn update<S: BackingStore>(
        &mut self,
        backing: &S,
        id: RecordId,
        apply: impl FnOnce(&mut R),
    ) -> StoreResult<bool> {
        if !self.mutate(id, apply) {
            return Ok(false);
        }
        self.persist(backing)?;
        Ok(true)
    }

    /// Write-through removal. An unknown `id` changes nothing, skips the
    /// durable write and reports `false`.
    pub fn remove<S: BackingStore>(&mut self, backing: &S, id: RecordId) -> StoreResult<bool> {
        if !self.delete(id) {
            return Ok(false);
        }
        self.persist(backing)?;
        Ok(true)
    }

    /// Borrowed view in insertion order, for derived-view computation.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Cloned snapshot in insertion order; mutating it does not touch the
    /// store.
    pub fn list(&self) -> Vec<R> {
        self.records.clone()
    }

    /// Looks up one record by identifier.
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Captures the in-memory state for multi-collection transactions.
    pub fn snapshot(&self) -> Vec<R> {
        self.records.clone()
    }

    /// Restores a previously captured snapshot, rolling back staged writes.
    /// The identifier counter is not rewound; allocated ids stay burned.
    pub fn restore(&mut self, snapshot: Vec<R>) {
        self.records = snapshot;
    }
}
