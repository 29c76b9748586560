//! Career family records: catalog entries, learning resources and curated
//! multi-career paths.
//!
//! # Invariants
//! - `CareerPath::career_ids` holds weak references into the career catalog;
//!   resolution skips dangling ids instead of erroring.
//! - `Career::skills` entries are matched as loose case-insensitive
//!   substrings by the recommendation view; that looseness is policy.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// One entry in the career catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    pub id: RecordId,
    pub title: String,
    pub field: String,
    pub description: String,
    /// Skill/interest tags used by search and recommendations.
    pub skills: Vec<String>,
    pub education: String,
}

impl Record for Career {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewCareer {
    pub title: String,
    pub field: String,
    pub description: String,
    pub skills: Vec<String>,
    pub education: String,
}

#[derive(Debug, Clone, Default)]
pub struct CareerPatch {
    pub title: Option<String>,
    pub field: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<String>,
}

impl Career {
    pub fn apply(&mut self, patch: CareerPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(field) = patch.field {
            self.field = field;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(education) = patch.education {
            self.education = education;
        }
    }
}

/// External learning resource (article, video, course link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerResource {
    pub id: RecordId,
    pub title: String,
    pub url: String,
    pub category: String,
    /// Epoch milliseconds; drives the "latest resources" view.
    pub created_at: i64,
}

impl Record for CareerResource {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewCareerResource {
    pub title: String,
    pub url: String,
    pub category: String,
}

/// Curated sequence of catalog careers (weak references).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub career_ids: Vec<RecordId>,
}

impl Record for CareerPath {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewCareerPath {
    pub name: String,
    pub description: String,
    pub career_ids: Vec<RecordId>,
}
