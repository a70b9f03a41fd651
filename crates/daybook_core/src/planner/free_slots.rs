//! Weekly free-slot computation.
//!
//! # Responsibility
//! - Merge a day's busy intervals and emit the complementary gaps within
//!   working hours, for seven days from a given start.
//!
//! # Invariants
//! - Cancelled items occupy no time.
//! - Items without both start and end occupy no time.
//! - Emitted gaps are at least the requested duration and lie fully
//!   inside the working window.

use crate::model::schedule::ScheduleItem;
use crate::model::time::TimeOfDay;
use crate::model::working_hours::WorkingHours;
use crate::model::ValidationError;
use chrono::NaiveDate;

/// One free gap on a day, inside working hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeSlot {
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl FreeSlot {
    pub fn length_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

/// Computes free slots of at least `duration_minutes` for the seven days
/// starting at `week_start`.
///
/// Arithmetic runs on minutes-since-midnight; the `HH:MM` form only
/// exists at the model boundary.
pub fn weekly_free_slots(
    schedules: &[ScheduleItem],
    week_start: NaiveDate,
    hours: WorkingHours,
    duration_minutes: u16,
) -> Result<Vec<FreeSlot>, ValidationError> {
    if duration_minutes == 0 {
        return Err(ValidationError::ZeroSlotDuration);
    }
    hours.validate()?;

    let window_start = hours.start.minutes();
    let window_end = hours.end.minutes();
    let mut slots = Vec::new();

    for date in week_start.iter_days().take(7) {
        let mut busy: Vec<(u16, u16)> = schedules
            .iter()
            .filter(|item| item.date == date && !item.is_cancelled())
            .filter_map(ScheduleItem::busy_interval)
            .map(|(start, end)| (start.minutes(), end.minutes()))
            .collect();
        busy.sort_unstable();

        // Walk the sorted intervals once; the cursor position merges
        // overlapping and adjacent intervals implicitly.
        let mut cursor = window_start;
        for (start, end) in busy {
            if cursor >= window_end {
                break;
            }
            let gap_end = start.min(window_end);
            if gap_end > cursor && gap_end - cursor >= duration_minutes {
                slots.push(FreeSlot {
                    date,
                    start: TimeOfDay::from_minutes(cursor)?,
                    end: TimeOfDay::from_minutes(gap_end)?,
                });
            }
            cursor = cursor.max(end);
        }
        if cursor < window_end && window_end - cursor >= duration_minutes {
            slots.push(FreeSlot {
                date,
                start: TimeOfDay::from_minutes(cursor)?,
                end: TimeOfDay::from_minutes(window_end)?,
            });
        }
    }

    Ok(slots)
}
