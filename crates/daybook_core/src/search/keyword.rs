//! Case-folded substring search.
//!
//! # Responsibility
//! - Match one free-text keyword against the searchable text fields.
//! - Distinguish "no query" from "zero matches" for the caller's UI.
//!
//! # Invariants
//! - Matching is case-insensitive and has no operator syntax.
//! - Results are ordered `updated_at` descending, ties by insertion
//!   order.

use crate::model::entry::DiaryEntry;
use crate::model::schedule::ScheduleItem;
use crate::store::StoreDocument;

/// Maximum hits returned per collection.
///
/// A display concern, not a correctness one: it bounds render cost for
/// pathological stores and callers may page differently later.
pub const SEARCH_RESULT_CAP: usize = 120;

/// Search outcome; a blank keyword is its own state, rendered differently
/// from an empty match list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The keyword was empty or whitespace; nothing was searched.
    NoQuery,
    Results(SearchResults),
}

/// Matching records, most recently modified first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub entries: Vec<DiaryEntry>,
    pub schedules: Vec<ScheduleItem>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.schedules.is_empty()
    }
}

/// Runs the substring query over `document`.
pub fn search_document(document: &StoreDocument, keyword: &str) -> SearchOutcome {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::NoQuery;
    }

    let mut entries: Vec<DiaryEntry> = document
        .entries
        .iter()
        .filter(|entry| entry_haystack(entry).contains(&needle))
        .cloned()
        .collect();
    // Stable sort keeps insertion order for equal timestamps.
    entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    entries.truncate(SEARCH_RESULT_CAP);

    let mut schedules: Vec<ScheduleItem> = document
        .schedules
        .iter()
        .filter(|item| schedule_haystack(item).contains(&needle))
        .cloned()
        .collect();
    schedules.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    schedules.truncate(SEARCH_RESULT_CAP);

    SearchOutcome::Results(SearchResults { entries, schedules })
}

fn entry_haystack(entry: &DiaryEntry) -> String {
    [
        entry.title.as_str(),
        entry.body.as_str(),
        entry.wake.as_str(),
        entry.breakfast.as_str(),
        entry.lunch.as_str(),
        entry.dinner.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

fn schedule_haystack(item: &ScheduleItem) -> String {
    [item.title.as_str(), item.note.as_str(), item.party.as_str()]
        .join(" ")
        .to_lowercase()
}
