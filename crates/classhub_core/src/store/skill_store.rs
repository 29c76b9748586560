//! Skill-tracking entity store.

use crate::model::skill::{NewSkillEntry, SkillEntry, SkillEntryPatch};
use crate::model::RecordId;
use crate::storage::BackingStore;
use crate::store::{now_millis, Collection, StoreResult};
use crate::view::{self, StudentSkills};
use std::rc::Rc;

const SKILLS_KEY: &str = "skillsData";

/// Store for self-assessed student skills.
pub struct SkillStore<S: BackingStore> {
    backing: Rc<S>,
    entries: Collection<SkillEntry>,
}

impl<S: BackingStore> SkillStore<S> {
    pub fn open(backing: Rc<S>) -> StoreResult<Self> {
        let entries = Collection::hydrate(SKILLS_KEY, backing.as_ref(), seed_entries())?;
        Ok(Self { backing, entries })
    }

    pub fn add_skill(&mut self, new: NewSkillEntry) -> StoreResult<RecordId> {
        self.entries.add(self.backing.as_ref(), |id| SkillEntry {
            id,
            student: new.student,
            name: new.name,
            category: new.category,
            level: new.level.min(100),
            recorded_at: now_millis(),
        })
    }

    /// Patches one entry and refreshes its recording timestamp.
    pub fn update_skill(&mut self, id: RecordId, patch: SkillEntryPatch) -> StoreResult<bool> {
        self.entries.update(self.backing.as_ref(), id, |entry| {
            entry.apply(patch);
            entry.level = entry.level.min(100);
            entry.recorded_at = now_millis();
        })
    }

    pub fn remove_skill(&mut self, id: RecordId) -> StoreResult<bool> {
        self.entries.remove(self.backing.as_ref(), id)
    }

    pub fn entries(&self) -> Vec<SkillEntry> {
        self.entries.list()
    }

    /// Per-student overview, latest entry per skill name.
    pub fn overview(&self) -> Vec<StudentSkills> {
        view::skill_overview(self.entries.records())
    }
}

fn seed_entries() -> Vec<SkillEntry> {
    vec![
        SkillEntry {
            id: 1,
            student: "Andi".to_string(),
            name: "Pemrograman Python".to_string(),
            category: "Teknologi".to_string(),
            level: 55,
            recorded_at: 1_735_689_600_000,
        },
        SkillEntry {
            id: 2,
            student: "Sari".to_string(),
            name: "Public Speaking".to_string(),
            category: "Komunikasi".to_string(),
            level: 70,
            recorded_at: 1_736_294_400_000,
        },
    ]
}
