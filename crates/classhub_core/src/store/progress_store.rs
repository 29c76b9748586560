//! Study-progress entity store.
//!
//! Progress writes are append-only; the summary view applies last-write-wins
//! per (subject, topic) at read time, so recording 40 then 70 for the same
//! topic yields 70, never an average of history.

use crate::model::progress::ProgressEntry;
use crate::model::RecordId;
use crate::storage::BackingStore;
use crate::store::{now_millis, Collection, StoreResult};
use crate::view::{self, SubjectSummary};
use std::rc::Rc;

const PROGRESS_KEY: &str = "progressData";

/// Store for recorded study progress.
pub struct ProgressStore<S: BackingStore> {
    backing: Rc<S>,
    entries: Collection<ProgressEntry>,
}

impl<S: BackingStore> ProgressStore<S> {
    pub fn open(backing: Rc<S>) -> StoreResult<Self> {
        let entries = Collection::hydrate(PROGRESS_KEY, backing.as_ref(), seed_entries())?;
        Ok(Self { backing, entries })
    }

    /// Records a new value for `(subject, topic)`. Percent is clamped to 100.
    pub fn update_progress(
        &mut self,
        subject: impl Into<String>,
        topic: impl Into<String>,
        percent: u8,
    ) -> StoreResult<RecordId> {
        let subject = subject.into();
        let topic = topic.into();
        self.entries.add(self.backing.as_ref(), |id| ProgressEntry {
            id,
            subject,
            topic,
            percent: percent.min(100),
            recorded_at: now_millis(),
        })
    }

    pub fn remove_entry(&mut self, id: RecordId) -> StoreResult<bool> {
        self.entries.remove(self.backing.as_ref(), id)
    }

    pub fn entries(&self) -> Vec<ProgressEntry> {
        self.entries.list()
    }

    /// Per-subject completion summaries, recomputed fresh per call.
    pub fn summaries(&self) -> Vec<SubjectSummary> {
        view::subject_summaries(self.entries.records())
    }
}

fn seed_entries() -> Vec<ProgressEntry> {
    vec![
        ProgressEntry {
            id: 1,
            subject: "Matematika".to_string(),
            topic: "Aljabar".to_string(),
            percent: 60,
            recorded_at: 1_735_689_600_000,
        },
        ProgressEntry {
            id: 2,
            subject: "Matematika".to_string(),
            topic: "Trigonometri".to_string(),
            percent: 40,
            recorded_at: 1_736_294_400_000,
        },
        ProgressEntry {
            id: 3,
            subject: "Bahasa Inggris".to_string(),
            topic: "Reading".to_string(),
            percent: 75,
            recorded_at: 1_736_899_200_000,
        },
    ]
}
