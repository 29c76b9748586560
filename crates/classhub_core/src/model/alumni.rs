//! Alumni family records: directory profiles, reunion events, success
//! stories and mentoring requests.
//!
//! # Invariants
//! - `SuccessStory::alumni_id` and `MentoringRequest::mentor_id` are weak
//!   references: the target profile may be deleted independently and readers
//!   must degrade, not error.
//! - `AlumniEvent::date`/`time` are `YYYY-MM-DD` / `HH:MM` display strings;
//!   views parse them on demand.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Directory entry for one graduate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniProfile {
    pub id: RecordId,
    pub name: String,
    pub graduation_year: u16,
    pub occupation: String,
    pub bio: String,
    /// Free-text interest tags, searched and matched as loose substrings.
    pub interests: Vec<String>,
    pub available_for_mentoring: bool,
}

impl Record for AlumniProfile {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Caller-supplied fields for a new profile.
#[derive(Debug, Clone, Default)]
pub struct NewAlumniProfile {
    pub name: String,
    pub graduation_year: u16,
    pub occupation: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub available_for_mentoring: bool,
}

/// Shallow-merge patch for a profile. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AlumniProfilePatch {
    pub name: Option<String>,
    pub graduation_year: Option<u16>,
    pub occupation: Option<String>,
    pub bio: Option<String>,
    pub interests: Option<Vec<String>>,
    pub available_for_mentoring: Option<bool>,
}

impl AlumniProfile {
    pub fn apply(&mut self, patch: AlumniProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(year) = patch.graduation_year {
            self.graduation_year = year;
        }
        if let Some(occupation) = patch.occupation {
            self.occupation = occupation;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(interests) = patch.interests {
            self.interests = interests;
        }
        if let Some(flag) = patch.available_for_mentoring {
            self.available_for_mentoring = flag;
        }
    }
}

/// Reunion/networking event in the alumni calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniEvent {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, 24-hour.
    pub time: String,
    pub location: String,
}

impl Record for AlumniEvent {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewAlumniEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Debug, Clone, Default)]
pub struct AlumniEventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
}

impl AlumniEvent {
    pub fn apply(&mut self, patch: AlumniEventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
    }
}

/// Published story about one alumnus; `alumni_id` is a weak reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessStory {
    pub id: RecordId,
    pub alumni_id: RecordId,
    pub title: String,
    pub body: String,
    /// Epoch milliseconds at publication.
    pub published_at: i64,
}

impl Record for SuccessStory {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewSuccessStory {
    pub alumni_id: RecordId,
    pub title: String,
    pub body: String,
}

/// Lifecycle state of a mentoring request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentoringStatus {
    Pending,
    Accepted,
    Declined,
}

/// Student-initiated request towards one mentor profile (weak reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentoringRequest {
    pub id: RecordId,
    pub mentor_id: RecordId,
    pub student_name: String,
    pub topic: String,
    pub status: MentoringStatus,
    /// Epoch milliseconds at creation.
    pub created_at: i64,
}

impl Record for MentoringRequest {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewMentoringRequest {
    pub mentor_id: RecordId,
    pub student_name: String,
    pub topic: String,
}
