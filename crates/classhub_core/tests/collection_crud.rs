use classhub_core::model::alumni::{AlumniProfilePatch, NewAlumniProfile};
use classhub_core::store::alumni_store::AlumniStore;
use classhub_core::{BackingStore, MemoryBackingStore};
use std::collections::HashSet;
use std::rc::Rc;

fn empty_backing() -> Rc<MemoryBackingStore> {
    let backing = MemoryBackingStore::new();
    backing.preload("alumniProfiles", "[]");
    backing.preload("alumniEvents", "[]");
    backing.preload("successStories", "[]");
    backing.preload("mentoringRequests", "[]");
    Rc::new(backing)
}

fn profile_named(name: &str) -> NewAlumniProfile {
    NewAlumniProfile {
        name: name.to_string(),
        ..NewAlumniProfile::default()
    }
}

#[test]
fn add_on_empty_collection_assigns_id_and_lists_one_record() {
    let backing = empty_backing();
    let mut store = AlumniStore::open(Rc::clone(&backing)).unwrap();

    let id = store.add_profile(profile_named("X")).unwrap();

    let profiles = store.profiles();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, id);
    assert_eq!(profiles[0].name, "X");
}

#[test]
fn identifiers_are_pairwise_distinct() {
    let backing = empty_backing();
    let mut store = AlumniStore::open(backing).unwrap();

    let mut ids = HashSet::new();
    for n in 0..50 {
        let id = store.add_profile(profile_named(&format!("alumni {n}"))).unwrap();
        assert!(ids.insert(id), "duplicate identifier {id}");
    }
}

#[test]
fn update_preserves_identifier_and_unpatched_fields() {
    let backing = empty_backing();
    let mut store = AlumniStore::open(backing).unwrap();

    let id = store
        .add_profile(NewAlumniProfile {
            name: "Rina".to_string(),
            occupation: "Engineer".to_string(),
            ..NewAlumniProfile::default()
        })
        .unwrap();

    let found = store
        .update_profile(
            id,
            AlumniProfilePatch {
                bio: Some("A".to_string()),
                ..AlumniProfilePatch::default()
            },
        )
        .unwrap();
    assert!(found);
    let found = store
        .update_profile(
            id,
            AlumniProfilePatch {
                bio: Some("B".to_string()),
                ..AlumniProfilePatch::default()
            },
        )
        .unwrap();
    assert!(found);

    let profiles = store.profiles();
    assert_eq!(profiles[0].id, id);
    assert_eq!(profiles[0].bio, "B");
    assert_eq!(profiles[0].name, "Rina");
    assert_eq!(profiles[0].occupation, "Engineer");
}

#[test]
fn update_unknown_id_is_detectable_no_op() {
    let backing = empty_backing();
    let mut store = AlumniStore::open(backing).unwrap();

    let found = store
        .update_profile(
            999,
            AlumniProfilePatch {
                bio: Some("ghost".to_string()),
                ..AlumniProfilePatch::default()
            },
        )
        .unwrap();

    assert!(!found);
    assert!(store.profiles().is_empty());
}

#[test]
fn remove_is_idempotent() {
    let backing = empty_backing();
    let mut store = AlumniStore::open(backing).unwrap();

    let id = store.add_profile(profile_named("temp")).unwrap();

    assert!(store.remove_profile(id).unwrap());
    assert!(!store.remove_profile(id).unwrap());
    assert!(store.profiles().is_empty());
}

#[test]
fn persisted_state_survives_rehydration_in_order() {
    let backing = empty_backing();
    let mut store = AlumniStore::open(Rc::clone(&backing)).unwrap();
    store.add_profile(profile_named("first")).unwrap();
    store.add_profile(profile_named("second")).unwrap();
    store.add_profile(profile_named("third")).unwrap();
    let before = store.profiles();
    drop(store);

    let reopened = AlumniStore::open(backing).unwrap();
    assert_eq!(reopened.profiles(), before);
}

#[test]
fn corrupt_blob_falls_back_to_seed_and_repersists() {
    let backing = Rc::new(MemoryBackingStore::new());
    backing.preload("alumniProfiles", "{ not json [");

    let store = AlumniStore::open(Rc::clone(&backing)).unwrap();

    // Seed content replaced the corrupt blob and was written back.
    assert!(!store.profiles().is_empty());
    let repaired = backing.get("alumniProfiles").unwrap().unwrap();
    assert!(repaired.starts_with('['));
}

#[test]
fn list_returns_snapshot_not_live_handle() {
    let backing = empty_backing();
    let mut store = AlumniStore::open(backing).unwrap();
    store.add_profile(profile_named("stable")).unwrap();

    let mut snapshot = store.profiles();
    snapshot.clear();

    assert_eq!(store.profiles().len(), 1);
}
