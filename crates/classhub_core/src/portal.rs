//! Portal context: one explicitly constructed object owning every entity
//! store plus the outcome sinks.
//!
//! # Responsibility
//! - Replace per-family module singletons with a single injected context
//!   that the UI tree owns.
//! - Orchestrate the few operations that span stores or report through
//!   sinks; plain CRUD goes straight to the public store fields.
//!
//! # Invariants
//! - One `Portal` per process; all stores share one backing store handle.
//! - Sink calls are fire-and-forget and never alter control flow.

use crate::model::alumni::{AlumniEvent, NewMentoringRequest};
use crate::model::content::NewAnnouncement;
use crate::model::RecordId;
use crate::search::{search_stores, SearchResults};
use crate::sink::{ActivitySink, NotificationSink, NullSink, Severity};
use crate::storage::BackingStore;
use crate::store::alumni_store::AlumniStore;
use crate::store::career_store::CareerStore;
use crate::store::content_store::ContentStore;
use crate::store::message_store::MessageStore;
use crate::store::progress_store::ProgressStore;
use crate::store::skill_store::SkillStore;
use crate::store::StoreResult;
use crate::view::ResolvedStory;
use chrono::Local;
use std::rc::Rc;

/// The class portal's data core: six entity stores behind one handle.
pub struct Portal<S: BackingStore> {
    pub alumni: AlumniStore<S>,
    pub careers: CareerStore<S>,
    pub messages: MessageStore<S>,
    pub progress: ProgressStore<S>,
    pub skills: SkillStore<S>,
    pub content: ContentStore<S>,
    notifier: Rc<dyn NotificationSink>,
    activity: Rc<dyn ActivitySink>,
}

impl<S: BackingStore> Portal<S> {
    /// Hydrates every store from `backing`, with silent sinks.
    pub fn open(backing: Rc<S>) -> StoreResult<Self> {
        Self::open_with_sinks(backing, Rc::new(NullSink), Rc::new(NullSink))
    }

    /// Hydrates every store and wires the outcome collaborators.
    pub fn open_with_sinks(
        backing: Rc<S>,
        notifier: Rc<dyn NotificationSink>,
        activity: Rc<dyn ActivitySink>,
    ) -> StoreResult<Self> {
        Ok(Self {
            alumni: AlumniStore::open(Rc::clone(&backing))?,
            careers: CareerStore::open(Rc::clone(&backing))?,
            messages: MessageStore::open(Rc::clone(&backing))?,
            progress: ProgressStore::open(Rc::clone(&backing))?,
            skills: SkillStore::open(Rc::clone(&backing))?,
            content: ContentStore::open(backing)?,
            notifier,
            activity,
        })
    }

    /// Free-text search across all searchable families, fixed family order.
    pub fn search(&self, query: &str) -> SearchResults {
        search_stores(
            &self.content,
            &self.alumni,
            &self.careers,
            &self.messages,
            query,
        )
    }

    /// Admin-grade announcement publish with audit record and user feedback.
    pub fn publish_announcement(&mut self, new: NewAnnouncement) -> StoreResult<RecordId> {
        let title = new.title.clone();
        match self.content.add_announcement(new) {
            Ok(id) => {
                self.activity.record("announcement_publish", &title);
                self.notifier
                    .notify("Pengumuman berhasil diterbitkan", Severity::Success);
                Ok(id)
            }
            Err(err) => {
                self.notifier
                    .notify("Pengumuman gagal disimpan", Severity::Error);
                Err(err)
            }
        }
    }

    /// Sends into a conversation via the two-collection transaction and
    /// reports the outcome.
    pub fn send_message(
        &mut self,
        conversation_id: RecordId,
        sender: &str,
        body: &str,
    ) -> StoreResult<RecordId> {
        match self.messages.send_message(conversation_id, sender, body) {
            Ok(id) => {
                self.notifier.notify("Pesan terkirim", Severity::Success);
                Ok(id)
            }
            Err(err) => {
                self.notifier
                    .notify("Pesan gagal terkirim", Severity::Error);
                Err(err)
            }
        }
    }

    /// Files a mentoring request against a mentor profile (weak reference)
    /// and records it in the audit trail.
    pub fn request_mentoring(&mut self, new: NewMentoringRequest) -> StoreResult<RecordId> {
        let topic = new.topic.clone();
        let id = self.alumni.request_mentoring(new)?;
        self.activity.record("mentoring_request", &topic);
        Ok(id)
    }

    /// Upcoming alumni events relative to the local wall clock.
    pub fn upcoming_events(&self) -> Vec<AlumniEvent> {
        self.alumni.upcoming_events(Local::now().naive_local())
    }

    /// Success stories joined weakly against the alumni directory.
    pub fn resolved_stories(&self) -> Vec<ResolvedStory> {
        self.alumni.resolved_stories()
    }
}
