//! Site content family records: announcements, gallery items and the weekly
//! class schedule.

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Class announcement shown on the portal front page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub body: String,
    pub category: String,
    /// `YYYY-MM-DD` display date.
    pub date: String,
}

impl Record for Announcement {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewAnnouncement {
    pub title: String,
    pub body: String,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, Default)]
pub struct AnnouncementPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl Announcement {
    pub fn apply(&mut self, patch: AnnouncementPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

/// Photo gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: RecordId,
    pub title: String,
    pub caption: String,
    pub image_url: String,
    /// `YYYY-MM-DD` display date.
    pub date: String,
}

impl Record for GalleryItem {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewGalleryItem {
    pub title: String,
    pub caption: String,
    pub image_url: String,
    pub date: String,
}

/// One slot in the weekly class schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: RecordId,
    pub day: String,
    pub subject: String,
    /// `HH:MM`, 24-hour.
    pub start_time: String,
    pub end_time: String,
    pub teacher: String,
}

impl Record for ScheduleEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewScheduleEntry {
    pub day: String,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub teacher: String,
}
