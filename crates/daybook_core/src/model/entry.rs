//! Diary entry domain model.
//!
//! # Responsibility
//! - Define the per-day diary record and its partial-update shape.
//! - Enforce timestamp ordering on every write path.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `date` is a local calendar day; multiple entries may share one date.
//! - `updated_at >= created_at`.

use crate::model::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a diary entry.
pub type EntryId = Uuid;

/// One diary record for a calendar day.
///
/// Text fields default to empty strings so the persisted document matches
/// the editor form, which always submits every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Wake-up note, e.g. `06:40` or free text.
    #[serde(default)]
    pub wake: String,
    #[serde(default)]
    pub breakfast: String,
    #[serde(default)]
    pub lunch: String,
    #[serde(default)]
    pub dinner: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Never precedes `created_at`.
    pub updated_at: i64,
}

impl DiaryEntry {
    /// Creates a blank entry for `date` with both timestamps at `now_ms`.
    pub fn blank(date: NaiveDate, now_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            title: String::new(),
            body: String::new(),
            wake: String::new(),
            breakfast: String::new(),
            lunch: String::new(),
            dinner: String::new(),
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.updated_at < self.created_at {
            return Err(ValidationError::UpdatedBeforeCreated {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }
}

/// Partial update for a diary entry.
///
/// `None` fields are preserved on the target record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub wake: Option<String>,
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

impl EntryPatch {
    /// Merges supplied fields over `entry`, leaving the rest untouched.
    ///
    /// Timestamps are the store's concern and are not written here.
    pub fn apply(&self, entry: &mut DiaryEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(title) = &self.title {
            entry.title = title.clone();
        }
        if let Some(body) = &self.body {
            entry.body = body.clone();
        }
        if let Some(wake) = &self.wake {
            entry.wake = wake.clone();
        }
        if let Some(breakfast) = &self.breakfast {
            entry.breakfast = breakfast.clone();
        }
        if let Some(lunch) = &self.lunch {
            entry.lunch = lunch.clone();
        }
        if let Some(dinner) = &self.dinner {
            entry.dinner = dinner.clone();
        }
    }
}
