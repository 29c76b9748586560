//! Alumni entity store: directory profiles, events, success stories and
//! mentoring requests.
//!
//! # Responsibility
//! - Own the four alumni collections and their reserved keys.
//! - Provide typed CRUD plus thin wrappers over the derived views.
//!
//! # Invariants
//! - Removing a profile never touches stories or requests that reference it;
//!   readers resolve those references weakly.

use crate::model::alumni::{
    AlumniEvent, AlumniEventPatch, AlumniProfile, AlumniProfilePatch, MentoringRequest,
    MentoringStatus, NewAlumniEvent, NewAlumniProfile, NewMentoringRequest, NewSuccessStory,
    SuccessStory,
};
use crate::model::RecordId;
use crate::storage::BackingStore;
use crate::store::{now_millis, Collection, StoreResult};
use crate::view;
use chrono::NaiveDateTime;
use std::rc::Rc;

const PROFILES_KEY: &str = "alumniProfiles";
const EVENTS_KEY: &str = "alumniEvents";
const STORIES_KEY: &str = "successStories";
const REQUESTS_KEY: &str = "mentoringRequests";

/// Store for the alumni entity family.
pub struct AlumniStore<S: BackingStore> {
    backing: Rc<S>,
    profiles: Collection<AlumniProfile>,
    events: Collection<AlumniEvent>,
    stories: Collection<SuccessStory>,
    requests: Collection<MentoringRequest>,
}

impl<S: BackingStore> AlumniStore<S> {
    /// Hydrates all four collections, seeding demo content where needed.
    pub fn open(backing: Rc<S>) -> StoreResult<Self> {
        let profiles = Collection::hydrate(PROFILES_KEY, backing.as_ref(), seed_profiles())?;
        let events = Collection::hydrate(EVENTS_KEY, backing.as_ref(), seed_events())?;
        let stories = Collection::hydrate(STORIES_KEY, backing.as_ref(), seed_stories())?;
        let requests = Collection::hydrate(REQUESTS_KEY, backing.as_ref(), Vec::new())?;
        Ok(Self {
            backing,
            profiles,
            events,
            stories,
            requests,
        })
    }

    pub fn add_profile(&mut self, new: NewAlumniProfile) -> StoreResult<RecordId> {
        self.profiles.add(self.backing.as_ref(), |id| AlumniProfile {
            id,
            name: new.name,
            graduation_year: new.graduation_year,
            occupation: new.occupation,
            bio: new.bio,
            interests: new.interests,
            available_for_mentoring: new.available_for_mentoring,
        })
    }

    /// Shallow-merges `patch`; unknown id is a detectable no-op.
    pub fn update_profile(&mut self, id: RecordId, patch: AlumniProfilePatch) -> StoreResult<bool> {
        self.profiles
            .update(self.backing.as_ref(), id, |profile| profile.apply(patch))
    }

    pub fn remove_profile(&mut self, id: RecordId) -> StoreResult<bool> {
        self.profiles.remove(self.backing.as_ref(), id)
    }

    pub fn profiles(&self) -> Vec<AlumniProfile> {
        self.profiles.list()
    }

    pub fn get_profile(&self, id: RecordId) -> Option<AlumniProfile> {
        self.profiles.get(id).cloned()
    }

    pub fn add_event(&mut self, new: NewAlumniEvent) -> StoreResult<RecordId> {
        self.events.add(self.backing.as_ref(), |id| AlumniEvent {
            id,
            title: new.title,
            description: new.description,
            date: new.date,
            time: new.time,
            location: new.location,
        })
    }

    pub fn update_event(&mut self, id: RecordId, patch: AlumniEventPatch) -> StoreResult<bool> {
        self.events
            .update(self.backing.as_ref(), id, |event| event.apply(patch))
    }

    pub fn remove_event(&mut self, id: RecordId) -> StoreResult<bool> {
        self.events.remove(self.backing.as_ref(), id)
    }

    pub fn events(&self) -> Vec<AlumniEvent> {
        self.events.list()
    }

    pub fn publish_story(&mut self, new: NewSuccessStory) -> StoreResult<RecordId> {
        self.stories.add(self.backing.as_ref(), |id| SuccessStory {
            id,
            alumni_id: new.alumni_id,
            title: new.title,
            body: new.body,
            published_at: now_millis(),
        })
    }

    pub fn remove_story(&mut self, id: RecordId) -> StoreResult<bool> {
        self.stories.remove(self.backing.as_ref(), id)
    }

    pub fn stories(&self) -> Vec<SuccessStory> {
        self.stories.list()
    }

    pub fn request_mentoring(&mut self, new: NewMentoringRequest) -> StoreResult<RecordId> {
        self.requests
            .add(self.backing.as_ref(), |id| MentoringRequest {
                id,
                mentor_id: new.mentor_id,
                student_name: new.student_name,
                topic: new.topic,
                status: MentoringStatus::Pending,
                created_at: now_millis(),
            })
    }

    pub fn set_request_status(
        &mut self,
        id: RecordId,
        status: MentoringStatus,
    ) -> StoreResult<bool> {
        self.requests
            .update(self.backing.as_ref(), id, |request| {
                request.status = status;
            })
    }

    pub fn requests(&self) -> Vec<MentoringRequest> {
        self.requests.list()
    }

    /// Profiles currently offering mentoring.
    pub fn available_mentors(&self) -> Vec<AlumniProfile> {
        view::available_mentors(self.profiles.records())
    }

    /// Events strictly later than `now`, recomputed fresh per call.
    pub fn upcoming_events(&self, now: NaiveDateTime) -> Vec<AlumniEvent> {
        view::upcoming_events(self.events.records(), now)
    }

    /// Stories joined weakly against the profile directory.
    pub fn resolved_stories(&self) -> Vec<view::ResolvedStory> {
        view::resolve_stories(self.stories.records(), self.profiles.records())
    }
}

fn seed_profiles() -> Vec<AlumniProfile> {
    vec![
        AlumniProfile {
            id: 1,
            name: "Rina Kusuma".to_string(),
            graduation_year: 2018,
            occupation: "Network Engineer".to_string(),
            bio: "Merancang jaringan kampus di Bandung sejak lulus.".to_string(),
            interests: vec!["Networking".to_string(), "Cloud Computing".to_string()],
            available_for_mentoring: true,
        },
        AlumniProfile {
            id: 2,
            name: "Budi Santoso".to_string(),
            graduation_year: 2017,
            occupation: "Cybersecurity Analyst".to_string(),
            bio: "Analis keamanan di perusahaan fintech.".to_string(),
            interests: vec!["Security".to_string(), "Linux".to_string()],
            available_for_mentoring: true,
        },
        AlumniProfile {
            id: 3,
            name: "Putri Maharani".to_string(),
            graduation_year: 2019,
            occupation: "UI/UX Designer".to_string(),
            bio: "Desainer produk untuk aplikasi edukasi.".to_string(),
            interests: vec!["Desain Grafis".to_string(), "Web".to_string()],
            available_for_mentoring: false,
        },
    ]
}

fn seed_events() -> Vec<AlumniEvent> {
    vec![
        AlumniEvent {
            id: 1,
            title: "Reuni Akbar Angkatan".to_string(),
            description: "Temu kangen seluruh angkatan di aula sekolah.".to_string(),
            date: "2027-06-20".to_string(),
            time: "10:00".to_string(),
            location: "Aula SMA Harapan".to_string(),
        },
        AlumniEvent {
            id: 2,
            title: "Sharing Session Karier IT".to_string(),
            description: "Alumni berbagi pengalaman kerja di industri IT.".to_string(),
            date: "2025-11-15".to_string(),
            time: "13:30".to_string(),
            location: "Lab Komputer 2".to_string(),
        },
    ]
}

fn seed_stories() -> Vec<SuccessStory> {
    vec![SuccessStory {
        id: 1,
        alumni_id: 2,
        title: "Dari Lab Sekolah ke SOC Nasional".to_string(),
        body: "Budi memulai dari klub komputer sekolah dan kini memimpin tim \
               respons insiden."
            .to_string(),
        published_at: 1_735_689_600_000,
    }]
}
