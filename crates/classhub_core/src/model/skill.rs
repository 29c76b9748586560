//! Skill-tracking family records.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Self-assessed skill level for one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: RecordId,
    pub student: String,
    pub name: String,
    pub category: String,
    /// Level 0..=100; the overview view keeps the latest entry per
    /// (student, name).
    pub level: u8,
    /// Epoch milliseconds at recording time.
    pub recorded_at: i64,
}

impl Record for SkillEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewSkillEntry {
    pub student: String,
    pub name: String,
    pub category: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default)]
pub struct SkillEntryPatch {
    pub category: Option<String>,
    pub level: Option<u8>,
}

impl SkillEntry {
    pub fn apply(&mut self, patch: SkillEntryPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
    }
}
