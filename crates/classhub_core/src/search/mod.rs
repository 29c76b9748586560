//! Cross-store free-text search aggregator.
//!
//! # Responsibility
//! - Answer one query against every searchable family and merge the hits
//!   into a single tagged list.
//!
//! # Invariants
//! - A blank (empty or whitespace-only) query returns an empty result
//!   without consulting any store.
//! - Families are consulted in a fixed order and results are concatenated,
//!   not relevance-ranked; within a family, collection order is preserved.
//! - A record matches when any of its designated text fields contains the
//!   query as a case-insensitive substring.

use crate::storage::BackingStore;
use crate::store::alumni_store::AlumniStore;
use crate::store::career_store::CareerStore;
use crate::store::content_store::ContentStore;
use crate::store::message_store::MessageStore;
use crate::view::fuzzy_contains;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Excerpt budget in characters, before the ellipsis marker.
const EXCERPT_MAX_CHARS: usize = 100;

/// Source family of one search hit, in consultation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFamily {
    Announcement,
    Gallery,
    Alumni,
    Career,
    Resource,
    Conversation,
}

impl SearchFamily {
    /// Stable display label for result grouping.
    pub fn label(self) -> &'static str {
        match self {
            Self::Announcement => "announcement",
            Self::Gallery => "gallery",
            Self::Alumni => "alumni",
            Self::Career => "career",
            Self::Resource => "resource",
            Self::Conversation => "conversation",
        }
    }
}

/// One merged search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub family: SearchFamily,
    pub title: String,
    /// First ~100 characters of the record's most relevant text field,
    /// whitespace-normalized, with a `...` marker when truncated.
    pub excerpt: String,
    /// Facet labels (category, date, tags) carried through unmodified.
    pub facets: Vec<String>,
}

/// The full merged result list plus its count. No pagination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub total: usize,
}

/// Runs one query across all searchable stores.
pub fn search_stores<S: BackingStore>(
    content: &ContentStore<S>,
    alumni: &AlumniStore<S>,
    careers: &CareerStore<S>,
    messages: &MessageStore<S>,
    query: &str,
) -> SearchResults {
    let needle = query.trim();
    if needle.is_empty() {
        return SearchResults::default();
    }

    let mut hits = Vec::new();

    for announcement in content.announcements() {
        let matched = fuzzy_contains(&announcement.title, needle)
            || fuzzy_contains(&announcement.body, needle)
            || fuzzy_contains(&announcement.category, needle);
        if matched {
            hits.push(SearchHit {
                family: SearchFamily::Announcement,
                title: announcement.title,
                excerpt: excerpt(&announcement.body),
                facets: vec![announcement.category, announcement.date],
            });
        }
    }

    for item in content.gallery() {
        let matched =
            fuzzy_contains(&item.title, needle) || fuzzy_contains(&item.caption, needle);
        if matched {
            hits.push(SearchHit {
                family: SearchFamily::Gallery,
                title: item.title,
                excerpt: excerpt(&item.caption),
                facets: vec![item.date],
            });
        }
    }

    for profile in alumni.profiles() {
        let matched = fuzzy_contains(&profile.name, needle)
            || fuzzy_contains(&profile.occupation, needle)
            || profile
                .interests
                .iter()
                .any(|interest| fuzzy_contains(interest, needle));
        if matched {
            hits.push(SearchHit {
                family: SearchFamily::Alumni,
                title: profile.name,
                excerpt: excerpt(&profile.bio),
                facets: profile.interests,
            });
        }
    }

    for career in careers.careers() {
        let matched = fuzzy_contains(&career.title, needle)
            || fuzzy_contains(&career.field, needle)
            || career.skills.iter().any(|skill| fuzzy_contains(skill, needle));
        if matched {
            hits.push(SearchHit {
                family: SearchFamily::Career,
                title: career.title,
                excerpt: excerpt(&career.description),
                facets: career.skills,
            });
        }
    }

    for resource in careers.resources() {
        let matched = fuzzy_contains(&resource.title, needle)
            || fuzzy_contains(&resource.category, needle);
        if matched {
            hits.push(SearchHit {
                family: SearchFamily::Resource,
                title: resource.title,
                excerpt: excerpt(&resource.url),
                facets: vec![resource.category],
            });
        }
    }

    for conversation in messages.conversations() {
        let matched = fuzzy_contains(&conversation.subject, needle)
            || conversation
                .participants
                .iter()
                .any(|participant| fuzzy_contains(participant, needle));
        if matched {
            hits.push(SearchHit {
                family: SearchFamily::Conversation,
                title: conversation.subject,
                excerpt: excerpt(&conversation.last_message),
                facets: conversation.participants,
            });
        }
    }

    let total = hits.len();
    SearchResults { hits, total }
}

/// Whitespace-normalized excerpt, capped at [`EXCERPT_MAX_CHARS`] characters
/// with a `...` marker when truncated.
fn excerpt(text: &str) -> String {
    let normalized = WHITESPACE_RE.replace_all(text, " ");
    let trimmed = normalized.trim();
    let mut out: String = trimmed.chars().take(EXCERPT_MAX_CHARS).collect();
    if trimmed.chars().count() > EXCERPT_MAX_CHARS {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{excerpt, EXCERPT_MAX_CHARS};

    #[test]
    fn excerpt_normalizes_whitespace() {
        assert_eq!(excerpt("satu\n  dua\ttiga"), "satu dua tiga");
    }

    #[test]
    fn excerpt_truncates_with_marker() {
        let long = "kata ".repeat(40);
        let result = excerpt(&long);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), EXCERPT_MAX_CHARS + 3);
    }

    #[test]
    fn excerpt_leaves_short_text_unmarked() {
        assert_eq!(excerpt("singkat"), "singkat");
    }
}
