//! Domain model for diary entries and schedule items.
//!
//! # Responsibility
//! - Define canonical record shapes persisted by the store.
//! - Keep field-level validation next to the data it guards.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - `updated_at` never precedes `created_at` on a persisted record.
//! - Calendar days carry no time-of-day or timezone component.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod entry;
pub mod schedule;
pub mod time;
pub mod working_hours;

use self::time::TimeOfDay;

/// Field-level validation failure shared across model types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Time-of-day text did not parse as `HH:MM`.
    InvalidTime(String),
    /// A timed range ended at or before its start.
    EndNotAfterStart { start: TimeOfDay, end: TimeOfDay },
    /// Record timestamps are inverted.
    UpdatedBeforeCreated { created_at: i64, updated_at: i64 },
    /// Working-hours window has zero or negative span.
    EmptyWorkingWindow { start: TimeOfDay, end: TimeOfDay },
    /// Requested slot duration was zero minutes.
    ZeroSlotDuration,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTime(text) => write!(f, "invalid time of day `{text}`; expected HH:MM"),
            Self::EndNotAfterStart { start, end } => {
                write!(f, "end time {end} must be after start time {start}")
            }
            Self::UpdatedBeforeCreated {
                created_at,
                updated_at,
            } => write!(
                f,
                "updated_at {updated_at} precedes created_at {created_at}"
            ),
            Self::EmptyWorkingWindow { start, end } => {
                write!(f, "working hours {start}-{end} span no time")
            }
            Self::ZeroSlotDuration => write!(f, "slot duration must be at least one minute"),
        }
    }
}

impl Error for ValidationError {}
