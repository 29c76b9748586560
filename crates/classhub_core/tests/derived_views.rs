use chrono::NaiveDate;
use classhub_core::model::alumni::{NewAlumniEvent, NewSuccessStory};
use classhub_core::model::career::CareerResource;
use classhub_core::store::alumni_store::AlumniStore;
use classhub_core::store::career_store::CareerStore;
use classhub_core::view;
use classhub_core::MemoryBackingStore;
use std::rc::Rc;

#[test]
fn upcoming_events_excludes_past_and_unparseable() {
    let backing = Rc::new(MemoryBackingStore::new());
    backing.preload("alumniEvents", "[]");
    let mut store = AlumniStore::open(backing).unwrap();

    store
        .add_event(NewAlumniEvent {
            title: "past".to_string(),
            date: "2026-01-10".to_string(),
            time: "09:00".to_string(),
            ..NewAlumniEvent::default()
        })
        .unwrap();
    store
        .add_event(NewAlumniEvent {
            title: "future".to_string(),
            date: "2026-09-01".to_string(),
            time: "10:00".to_string(),
            ..NewAlumniEvent::default()
        })
        .unwrap();
    store
        .add_event(NewAlumniEvent {
            title: "broken".to_string(),
            date: "someday".to_string(),
            time: "soon".to_string(),
            ..NewAlumniEvent::default()
        })
        .unwrap();

    let now = NaiveDate::from_ymd_opt(2026, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let upcoming = store.upcoming_events(now);

    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].title, "future");
}

#[test]
fn upcoming_is_strictly_later_than_now() {
    let backing = Rc::new(MemoryBackingStore::new());
    backing.preload("alumniEvents", "[]");
    let mut store = AlumniStore::open(backing).unwrap();

    store
        .add_event(NewAlumniEvent {
            title: "exact".to_string(),
            date: "2026-06-01".to_string(),
            time: "12:00".to_string(),
            ..NewAlumniEvent::default()
        })
        .unwrap();

    let now = NaiveDate::from_ymd_opt(2026, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert!(store.upcoming_events(now).is_empty());
}

#[test]
fn top_n_recent_is_stable_for_equal_timestamps() {
    let resources: Vec<CareerResource> = ["alpha", "beta", "gamma", "delta"]
        .iter()
        .enumerate()
        .map(|(index, title)| CareerResource {
            id: index as i64 + 1,
            title: title.to_string(),
            url: String::new(),
            category: String::new(),
            created_at: if *title == "delta" { 10 } else { 5 },
        })
        .collect();

    let top = view::top_n_recent(&resources, 3, |resource| resource.created_at);

    assert_eq!(top[0].title, "delta");
    // Equal timestamps keep their original insertion order.
    assert_eq!(top[1].title, "alpha");
    assert_eq!(top[2].title, "beta");
}

#[test]
fn recommendations_match_loose_case_insensitive_substrings() {
    let backing = Rc::new(MemoryBackingStore::new());
    let store = CareerStore::open(backing).unwrap();

    // Seeded catalog has a career with skill "Cybersecurity Analyst".
    let matches = store.recommendations("Security");
    assert!(matches
        .iter()
        .any(|career| career.title == "Cybersecurity Analyst"));

    assert!(store.recommendations("nonexistent-skill").is_empty());
    assert!(store.recommendations("   ").is_empty());
}

#[test]
fn latest_resources_returns_three_most_recent() {
    let backing = Rc::new(MemoryBackingStore::new());
    let store = CareerStore::open(backing).unwrap();

    let latest = store.latest_resources();
    assert_eq!(latest.len(), 3);
    assert!(latest[0].created_at >= latest[1].created_at);
    assert!(latest[1].created_at >= latest[2].created_at);
}

#[test]
fn story_join_degrades_when_profile_is_deleted() {
    let backing = Rc::new(MemoryBackingStore::new());
    let mut store = AlumniStore::open(backing).unwrap();

    let mentor_id = store.profiles()[0].id;
    let story_id = store
        .publish_story(NewSuccessStory {
            alumni_id: mentor_id,
            title: "joined".to_string(),
            body: "story".to_string(),
        })
        .unwrap();

    let resolved = store.resolved_stories();
    let joined = resolved
        .iter()
        .find(|entry| entry.story.id == story_id)
        .unwrap();
    assert!(joined.alumni.is_some());

    store.remove_profile(mentor_id).unwrap();

    let resolved = store.resolved_stories();
    let dangling = resolved
        .iter()
        .find(|entry| entry.story.id == story_id)
        .unwrap();
    assert!(dangling.alumni.is_none());
}

#[test]
fn path_resolution_skips_dangling_career_ids() {
    let backing = Rc::new(MemoryBackingStore::new());
    let mut store = CareerStore::open(backing).unwrap();

    let path_id = store.paths()[0].id;
    let before = store.path_careers(path_id);
    assert_eq!(before.len(), 2);

    store.remove_career(before[0].id).unwrap();

    let after = store.path_careers(path_id);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, before[1].id);
}

#[test]
fn available_mentors_filters_on_flag() {
    let backing = Rc::new(MemoryBackingStore::new());
    let store = AlumniStore::open(backing).unwrap();

    let mentors = store.available_mentors();
    assert!(!mentors.is_empty());
    assert!(mentors.iter().all(|profile| profile.available_for_mentoring));
    assert!(mentors.len() < store.profiles().len());
}
