//! Site content entity store: announcements, gallery and class schedule.

use crate::model::content::{
    Announcement, AnnouncementPatch, GalleryItem, NewAnnouncement, NewGalleryItem,
    NewScheduleEntry, ScheduleEntry,
};
use crate::model::RecordId;
use crate::storage::BackingStore;
use crate::store::{Collection, StoreResult};
use std::rc::Rc;

const ANNOUNCEMENTS_KEY: &str = "announcements";
const GALLERY_KEY: &str = "galleryItems";
const SCHEDULE_KEY: &str = "scheduleEntries";

/// Store for general site content.
pub struct ContentStore<S: BackingStore> {
    backing: Rc<S>,
    announcements: Collection<Announcement>,
    gallery: Collection<GalleryItem>,
    schedule: Collection<ScheduleEntry>,
}

impl<S: BackingStore> ContentStore<S> {
    pub fn open(backing: Rc<S>) -> StoreResult<Self> {
        let announcements =
            Collection::hydrate(ANNOUNCEMENTS_KEY, backing.as_ref(), seed_announcements())?;
        let gallery = Collection::hydrate(GALLERY_KEY, backing.as_ref(), seed_gallery())?;
        let schedule = Collection::hydrate(SCHEDULE_KEY, backing.as_ref(), seed_schedule())?;
        Ok(Self {
            backing,
            announcements,
            gallery,
            schedule,
        })
    }

    pub fn add_announcement(&mut self, new: NewAnnouncement) -> StoreResult<RecordId> {
        self.announcements
            .add(self.backing.as_ref(), |id| Announcement {
                id,
                title: new.title,
                body: new.body,
                category: new.category,
                date: new.date,
            })
    }

    pub fn update_announcement(
        &mut self,
        id: RecordId,
        patch: AnnouncementPatch,
    ) -> StoreResult<bool> {
        self.announcements
            .update(self.backing.as_ref(), id, |announcement| {
                announcement.apply(patch)
            })
    }

    pub fn remove_announcement(&mut self, id: RecordId) -> StoreResult<bool> {
        self.announcements.remove(self.backing.as_ref(), id)
    }

    pub fn announcements(&self) -> Vec<Announcement> {
        self.announcements.list()
    }

    pub fn add_gallery_item(&mut self, new: NewGalleryItem) -> StoreResult<RecordId> {
        self.gallery.add(self.backing.as_ref(), |id| GalleryItem {
            id,
            title: new.title,
            caption: new.caption,
            image_url: new.image_url,
            date: new.date,
        })
    }

    pub fn remove_gallery_item(&mut self, id: RecordId) -> StoreResult<bool> {
        self.gallery.remove(self.backing.as_ref(), id)
    }

    pub fn gallery(&self) -> Vec<GalleryItem> {
        self.gallery.list()
    }

    pub fn add_schedule_entry(&mut self, new: NewScheduleEntry) -> StoreResult<RecordId> {
        self.schedule.add(self.backing.as_ref(), |id| ScheduleEntry {
            id,
            day: new.day,
            subject: new.subject,
            start_time: new.start_time,
            end_time: new.end_time,
            teacher: new.teacher,
        })
    }

    pub fn remove_schedule_entry(&mut self, id: RecordId) -> StoreResult<bool> {
        self.schedule.remove(self.backing.as_ref(), id)
    }

    pub fn schedule(&self) -> Vec<ScheduleEntry> {
        self.schedule.list()
    }
}

fn seed_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Ujian Tengah Semester".to_string(),
            body: "Ujian tengah semester dimulai hari Senin. Jadwal lengkap \
                   tersedia di papan pengumuman kelas."
                .to_string(),
            category: "Akademik".to_string(),
            date: "2026-03-02".to_string(),
        },
        Announcement {
            id: 2,
            title: "Lomba Fotografi Antar Kelas".to_string(),
            body: "Kumpulkan karya terbaikmu ke panitia sebelum akhir bulan.".to_string(),
            category: "Kegiatan".to_string(),
            date: "2026-03-10".to_string(),
        },
    ]
}

fn seed_gallery() -> Vec<GalleryItem> {
    vec![GalleryItem {
        id: 1,
        title: "Studi Wisata Museum".to_string(),
        caption: "Kunjungan kelas ke museum teknologi.".to_string(),
        image_url: "/gallery/studi-wisata.jpg".to_string(),
        date: "2025-11-20".to_string(),
    }]
}

fn seed_schedule() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry {
            id: 1,
            day: "Senin".to_string(),
            subject: "Matematika".to_string(),
            start_time: "07:30".to_string(),
            end_time: "09:00".to_string(),
            teacher: "Bu Lestari".to_string(),
        },
        ScheduleEntry {
            id: 2,
            day: "Senin".to_string(),
            subject: "Bahasa Inggris".to_string(),
            start_time: "09:15".to_string(),
            end_time: "10:45".to_string(),
            teacher: "Pak Darmawan".to_string(),
        },
    ]
}
