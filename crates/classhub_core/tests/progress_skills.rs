use classhub_core::model::skill::{NewSkillEntry, SkillEntryPatch};
use classhub_core::store::progress_store::ProgressStore;
use classhub_core::store::skill_store::SkillStore;
use classhub_core::MemoryBackingStore;
use std::rc::Rc;

fn empty_progress() -> ProgressStore<MemoryBackingStore> {
    let backing = MemoryBackingStore::new();
    backing.preload("progressData", "[]");
    ProgressStore::open(Rc::new(backing)).unwrap()
}

#[test]
fn repeated_topic_updates_use_latest_value_not_average() {
    let mut store = empty_progress();

    store.update_progress("Math", "Algebra", 40).unwrap();
    store.update_progress("Math", "Algebra", 70).unwrap();

    let summaries = store.summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].subject, "Math");
    assert_eq!(summaries[0].percent, 70);
}

#[test]
fn summary_averages_across_distinct_topics() {
    let mut store = empty_progress();

    store.update_progress("Math", "Algebra", 80).unwrap();
    store.update_progress("Math", "Geometry", 40).unwrap();
    store.update_progress("Fisika", "Optika", 30).unwrap();

    let summaries = store.summaries();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].subject, "Math");
    assert_eq!(summaries[0].percent, 60);
    assert_eq!(summaries[1].subject, "Fisika");
    assert_eq!(summaries[1].percent, 30);
}

#[test]
fn progress_history_is_append_only() {
    let mut store = empty_progress();

    store.update_progress("Math", "Algebra", 40).unwrap();
    store.update_progress("Math", "Algebra", 70).unwrap();

    // Both entries remain in the raw collection; only the view collapses them.
    assert_eq!(store.entries().len(), 2);
}

#[test]
fn percent_is_clamped_to_one_hundred() {
    let mut store = empty_progress();

    store.update_progress("Math", "Algebra", 250).unwrap();
    assert_eq!(store.summaries()[0].percent, 100);
}

#[test]
fn skill_overview_keeps_latest_entry_per_student_and_skill() {
    let backing = MemoryBackingStore::new();
    backing.preload("skillsData", "[]");
    let mut store = SkillStore::open(Rc::new(backing)).unwrap();

    store
        .add_skill(NewSkillEntry {
            student: "Andi".to_string(),
            name: "Python".to_string(),
            category: "Teknologi".to_string(),
            level: 40,
        })
        .unwrap();
    store
        .add_skill(NewSkillEntry {
            student: "Andi".to_string(),
            name: "Python".to_string(),
            category: "Teknologi".to_string(),
            level: 65,
        })
        .unwrap();
    store
        .add_skill(NewSkillEntry {
            student: "Sari".to_string(),
            name: "Menulis".to_string(),
            category: "Bahasa".to_string(),
            level: 80,
        })
        .unwrap();

    let overview = store.overview();
    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].student, "Andi");
    assert_eq!(overview[0].skills.len(), 1);
    assert_eq!(overview[0].skills[0].level, 65);
    assert_eq!(overview[1].student, "Sari");
}

#[test]
fn skill_patch_updates_level_in_place() {
    let backing = MemoryBackingStore::new();
    backing.preload("skillsData", "[]");
    let mut store = SkillStore::open(Rc::new(backing)).unwrap();

    let id = store
        .add_skill(NewSkillEntry {
            student: "Andi".to_string(),
            name: "Gitar".to_string(),
            category: "Seni".to_string(),
            level: 30,
        })
        .unwrap();

    let found = store
        .update_skill(
            id,
            SkillEntryPatch {
                level: Some(45),
                ..SkillEntryPatch::default()
            },
        )
        .unwrap();

    assert!(found);
    let entries = store.entries();
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].level, 45);
    assert_eq!(entries[0].category, "Seni");
}
