use classhub_core::model::alumni::NewMentoringRequest;
use classhub_core::model::content::NewAnnouncement;
use classhub_core::sink::{ActivitySink, NotificationSink, Severity};
use classhub_core::{open_store, open_store_in_memory, MemoryBackingStore, Portal};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingSink {
    notifications: RefCell<Vec<(String, Severity)>>,
    activities: RefCell<Vec<(String, String)>>,
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, severity: Severity) {
        self.notifications
            .borrow_mut()
            .push((message.to_string(), severity));
    }
}

impl ActivitySink for RecordingSink {
    fn record(&self, action: &str, detail: &str) {
        self.activities
            .borrow_mut()
            .push((action.to_string(), detail.to_string()));
    }
}

#[test]
fn portal_opens_with_seeded_stores() {
    let backing = Rc::new(open_store_in_memory().unwrap());
    let portal = Portal::open(backing).unwrap();

    assert!(!portal.alumni.profiles().is_empty());
    assert!(!portal.careers.careers().is_empty());
    assert!(!portal.messages.conversations().is_empty());
    assert!(!portal.progress.entries().is_empty());
    assert!(!portal.skills.entries().is_empty());
    assert!(!portal.content.announcements().is_empty());
}

#[test]
fn portal_state_survives_process_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("classhub.db");

    let announcement_id = {
        let backing = Rc::new(open_store(&db_path).unwrap());
        let mut portal = Portal::open(backing).unwrap();
        portal
            .content
            .add_announcement(NewAnnouncement {
                title: "Persisted".to_string(),
                body: "survives restart".to_string(),
                category: "Umum".to_string(),
                date: "2026-08-01".to_string(),
            })
            .unwrap()
    };

    let backing = Rc::new(open_store(&db_path).unwrap());
    let portal = Portal::open(backing).unwrap();
    let announcements = portal.content.announcements();
    let restored = announcements
        .iter()
        .find(|announcement| announcement.id == announcement_id)
        .expect("announcement should survive restart");
    assert_eq!(restored.title, "Persisted");
}

#[test]
fn publish_announcement_reports_through_both_sinks() {
    let backing = Rc::new(MemoryBackingStore::new());
    let sink = Rc::new(RecordingSink::default());
    let mut portal =
        Portal::open_with_sinks(
            backing,
            Rc::clone(&sink) as Rc<dyn NotificationSink>,
            Rc::clone(&sink) as Rc<dyn ActivitySink>,
        )
        .unwrap();

    portal
        .publish_announcement(NewAnnouncement {
            title: "Kerja Bakti".to_string(),
            body: "Sabtu pagi di halaman sekolah.".to_string(),
            category: "Kegiatan".to_string(),
            date: "2026-08-29".to_string(),
        })
        .unwrap();

    let notifications = sink.notifications.borrow();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].1, Severity::Success);

    let activities = sink.activities.borrow();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].0, "announcement_publish");
    assert_eq!(activities[0].1, "Kerja Bakti");
}

#[test]
fn send_message_via_portal_notifies_success() {
    let backing = Rc::new(MemoryBackingStore::new());
    let sink = Rc::new(RecordingSink::default());
    let mut portal =
        Portal::open_with_sinks(
            backing,
            Rc::clone(&sink) as Rc<dyn NotificationSink>,
            Rc::clone(&sink) as Rc<dyn ActivitySink>,
        )
        .unwrap();

    let conversation_id = portal.messages.conversations()[0].id;
    portal
        .send_message(conversation_id, "Andi", "sampai jumpa besok")
        .unwrap();

    let notifications = sink.notifications.borrow();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].0, "Pesan terkirim");
}

#[test]
fn mentoring_request_is_audited_and_starts_pending() {
    let backing = Rc::new(MemoryBackingStore::new());
    let sink = Rc::new(RecordingSink::default());
    let mut portal =
        Portal::open_with_sinks(
            backing,
            Rc::clone(&sink) as Rc<dyn NotificationSink>,
            Rc::clone(&sink) as Rc<dyn ActivitySink>,
        )
        .unwrap();

    let mentor_id = portal.alumni.available_mentors()[0].id;
    let request_id = portal
        .request_mentoring(NewMentoringRequest {
            mentor_id,
            student_name: "Sari".to_string(),
            topic: "Karier jaringan".to_string(),
        })
        .unwrap();

    let requests = portal.alumni.requests();
    let request = requests
        .iter()
        .find(|request| request.id == request_id)
        .unwrap();
    assert_eq!(
        request.status,
        classhub_core::model::alumni::MentoringStatus::Pending
    );

    let activities = sink.activities.borrow();
    assert_eq!(activities[0].0, "mentoring_request");
}

#[test]
fn two_stores_sharing_one_backing_stay_independent() {
    let backing = Rc::new(open_store_in_memory().unwrap());
    let mut portal = Portal::open(backing).unwrap();

    let careers_before = portal.careers.careers();
    portal
        .content
        .add_announcement(NewAnnouncement {
            title: "Tidak terkait".to_string(),
            body: "hanya konten".to_string(),
            category: "Umum".to_string(),
            date: "2026-01-05".to_string(),
        })
        .unwrap();

    assert_eq!(portal.careers.careers(), careers_before);
}
