//! Working-hours configuration.
//!
//! # Responsibility
//! - Hold the process-wide free-slot search window.
//!
//! # Invariants
//! - `start < end`; an empty window never reaches the planner.

use crate::model::time::TimeOfDay;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};

const DEFAULT_START_MINUTES: u16 = 9 * 60;
const DEFAULT_END_MINUTES: u16 = 18 * 60;

/// Daily window the free-slot planner searches within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl WorkingHours {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, ValidationError> {
        let hours = Self { start, end };
        hours.validate()?;
        Ok(hours)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start >= self.end {
            return Err(ValidationError::EmptyWorkingWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn span_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

impl Default for WorkingHours {
    /// 09:00-18:00, the window the settings screen proposes.
    fn default() -> Self {
        Self {
            start: TimeOfDay(DEFAULT_START_MINUTES),
            end: TimeOfDay(DEFAULT_END_MINUTES),
        }
    }
}
