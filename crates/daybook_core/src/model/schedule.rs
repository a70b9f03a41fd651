//! Schedule item domain model.
//!
//! # Responsibility
//! - Define the planned-event record and its partial-update shape.
//! - Enforce start/end ordering for timed items.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - When both `start` and `end` are set, `end` is strictly later.
//! - Cancelled items keep their times but occupy no busy interval.

use crate::model::time::TimeOfDay;
use crate::model::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a schedule item.
pub type ScheduleId = Uuid;

/// Coarse lifecycle tag used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Tentative,
    Confirmed,
    Cancelled,
}

/// One planned event, time-boxed or day-level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: ScheduleId,
    pub date: NaiveDate,
    #[serde(default)]
    pub start: Option<TimeOfDay>,
    #[serde(default)]
    pub end: Option<TimeOfDay>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub note: String,
    /// Attendee or counterpart, free text.
    #[serde(default)]
    pub party: String,
    /// Marks the item as achieved.
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub status: Option<ScheduleStatus>,
    /// Display tag only; the core never interprets it.
    #[serde(default)]
    pub color: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Never precedes `created_at`.
    pub updated_at: i64,
}

impl ScheduleItem {
    /// Creates a blank item for `date` with both timestamps at `now_ms`.
    pub fn blank(date: NaiveDate, now_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            start: None,
            end: None,
            title: String::new(),
            note: String::new(),
            party: String::new(),
            done: false,
            status: None,
            color: None,
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end <= start {
                return Err(ValidationError::EndNotAfterStart { start, end });
            }
        }
        if self.updated_at < self.created_at {
            return Err(ValidationError::UpdatedBeforeCreated {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.status, Some(ScheduleStatus::Cancelled))
    }

    /// Returns the occupied time range, or `None` for timeless items.
    pub fn busy_interval(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Partial update for a schedule item.
///
/// Outer `None` preserves the target field; `Some(None)` clears an
/// optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulePatch {
    pub date: Option<NaiveDate>,
    pub start: Option<Option<TimeOfDay>>,
    pub end: Option<Option<TimeOfDay>>,
    pub title: Option<String>,
    pub note: Option<String>,
    pub party: Option<String>,
    pub done: Option<bool>,
    pub status: Option<Option<ScheduleStatus>>,
    pub color: Option<Option<String>>,
}

impl SchedulePatch {
    /// Merges supplied fields over `item`, leaving the rest untouched.
    pub fn apply(&self, item: &mut ScheduleItem) {
        if let Some(date) = self.date {
            item.date = date;
        }
        if let Some(start) = self.start {
            item.start = start;
        }
        if let Some(end) = self.end {
            item.end = end;
        }
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(note) = &self.note {
            item.note = note.clone();
        }
        if let Some(party) = &self.party {
            item.party = party.clone();
        }
        if let Some(done) = self.done {
            item.done = done;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(color) = &self.color {
            item.color = color.clone();
        }
    }
}
