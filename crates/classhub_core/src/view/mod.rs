//! Derived view engine: read-only projections over collection slices.
//!
//! # Responsibility
//! - Compute filtered, sorted, joined and aggregated projections without
//!   mutating any collection.
//! - Keep the loose-match policy (`fuzzy_contains`) in one named, testable
//!   place instead of ad hoc string operations.
//!
//! # Invariants
//! - Every function re-runs its full scan per call; nothing is cached or
//!   indexed (collections stay in the tens-to-hundreds range).
//! - Weak-reference joins omit unresolved targets instead of erroring.
//! - Unparseable date/time fields exclude a record from time-based views.

use crate::model::alumni::{AlumniEvent, AlumniProfile, SuccessStory};
use crate::model::career::{Career, CareerPath};
use crate::model::message::Message;
use crate::model::progress::ProgressEntry;
use crate::model::skill::SkillEntry;
use crate::model::RecordId;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Case-insensitive substring containment.
///
/// This is the portal's deliberate loose-match policy: an interest tag of
/// `"Security"` matches a skill entry of `"Cybersecurity Analyst"`. The
/// false-positive tolerance is intentional and relied on by seed content.
pub fn fuzzy_contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Combines an event's `date` and `time` strings into one instant.
///
/// Returns `None` when either part does not parse; callers treat that as
/// "not schedulable" rather than an error.
pub fn event_instant(event: &AlumniEvent) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(&event.time, "%H:%M").ok()?;
    Some(date.and_time(time))
}

/// Events whose combined instant is strictly later than `now`.
pub fn upcoming_events(events: &[AlumniEvent], now: NaiveDateTime) -> Vec<AlumniEvent> {
    events
        .iter()
        .filter(|event| matches!(event_instant(event), Some(instant) if instant > now))
        .cloned()
        .collect()
}

/// Profiles currently offering mentoring.
pub fn available_mentors(profiles: &[AlumniProfile]) -> Vec<AlumniProfile> {
    profiles
        .iter()
        .filter(|profile| profile.available_for_mentoring)
        .cloned()
        .collect()
}

/// The `n` most recent items by `recency`, descending.
///
/// Uses a stable sort, so items with equal recency keep their original
/// insertion order.
pub fn top_n_recent<T: Clone>(items: &[T], n: usize, recency: impl Fn(&T) -> i64) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| recency(b).cmp(&recency(a)));
    sorted.truncate(n);
    sorted
}

/// Catalog careers whose skill tags loosely match `interest`.
pub fn recommend_careers(careers: &[Career], interest: &str) -> Vec<Career> {
    if interest.trim().is_empty() {
        return Vec::new();
    }
    careers
        .iter()
        .filter(|career| {
            career
                .skills
                .iter()
                .any(|skill| fuzzy_contains(skill, interest))
        })
        .cloned()
        .collect()
}

/// Careers referenced by a path, in path order, dangling ids skipped.
pub fn resolve_path_careers(path: &CareerPath, careers: &[Career]) -> Vec<Career> {
    path.career_ids
        .iter()
        .filter_map(|career_id| {
            careers
                .iter()
                .find(|career| career.id == *career_id)
                .cloned()
        })
        .collect()
}

/// A success story joined with its alumnus, when that profile still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStory {
    pub story: SuccessStory,
    /// `None` when the referenced profile was deleted (weak reference).
    pub alumni: Option<AlumniProfile>,
}

/// Joins each story against the profile directory.
pub fn resolve_stories(stories: &[SuccessStory], profiles: &[AlumniProfile]) -> Vec<ResolvedStory> {
    stories
        .iter()
        .map(|story| ResolvedStory {
            story: story.clone(),
            alumni: profiles
                .iter()
                .find(|profile| profile.id == story.alumni_id)
                .cloned(),
        })
        .collect()
}

/// Aggregated completion for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSummary {
    pub subject: String,
    /// Rounded average of each topic's current (last-written) value.
    pub percent: u8,
}

/// Per-subject summary with last-write-wins per (subject, topic).
///
/// Multiple entries for the same topic are one logical item: only the most
/// recently recorded value counts. Subjects appear in first-recorded order.
pub fn subject_summaries(entries: &[ProgressEntry]) -> Vec<SubjectSummary> {
    let mut subjects: Vec<(String, Vec<(String, u8)>)> = Vec::new();

    for entry in entries {
        if let Some((_, topics)) = subjects
            .iter_mut()
            .find(|(subject, _)| *subject == entry.subject)
        {
            if let Some((_, percent)) = topics.iter_mut().find(|(topic, _)| *topic == entry.topic) {
                *percent = entry.percent;
            } else {
                topics.push((entry.topic.clone(), entry.percent));
            }
        } else {
            subjects.push((
                entry.subject.clone(),
                vec![(entry.topic.clone(), entry.percent)],
            ));
        }
    }

    subjects
        .into_iter()
        .map(|(subject, topics)| {
            let total: u32 = topics.iter().map(|(_, percent)| u32::from(*percent)).sum();
            let percent = (f64::from(total) / topics.len() as f64).round() as u8;
            SubjectSummary { subject, percent }
        })
        .collect()
}

/// Latest skill entries for one student, one per skill name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSkills {
    pub student: String,
    pub skills: Vec<SkillEntry>,
}

/// Per-student overview with last-write-wins per (student, skill name).
pub fn skill_overview(entries: &[SkillEntry]) -> Vec<StudentSkills> {
    let mut students: Vec<StudentSkills> = Vec::new();

    for entry in entries {
        if let Some(overview) = students
            .iter_mut()
            .find(|overview| overview.student == entry.student)
        {
            if let Some(existing) = overview
                .skills
                .iter_mut()
                .find(|skill| skill.name == entry.name)
            {
                *existing = entry.clone();
            } else {
                overview.skills.push(entry.clone());
            }
        } else {
            students.push(StudentSkills {
                student: entry.student.clone(),
                skills: vec![entry.clone()],
            });
        }
    }

    students
}

/// Messages belonging to one conversation, in send order.
pub fn conversation_messages(messages: &[Message], conversation_id: RecordId) -> Vec<Message> {
    messages
        .iter()
        .filter(|message| message.conversation_id == conversation_id)
        .cloned()
        .collect()
}

/// Unread messages in one conversation.
pub fn unread_count(messages: &[Message], conversation_id: RecordId) -> usize {
    messages
        .iter()
        .filter(|message| message.conversation_id == conversation_id && !message.read)
        .count()
}
