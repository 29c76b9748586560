//! Study-progress family records.
//!
//! Progress is append-only history: every update adds a new entry, and the
//! per-subject summary view applies last-write-wins per (subject, topic) on
//! read. Nothing aggregated is ever stored.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// One recorded progress value for a (subject, topic) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: RecordId,
    pub subject: String,
    pub topic: String,
    /// Completion percentage, 0..=100.
    pub percent: u8,
    /// Epoch milliseconds at recording time.
    pub recorded_at: i64,
}

impl Record for ProgressEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}
