//! Core domain logic for Daybook.
//! This crate is the single source of truth for business invariants.

pub mod calendar;
pub mod db;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod planner;
pub mod search;
pub mod store;

pub use calendar::{local_today, month_grid, CalendarCell, MonthCursor, GRID_CELL_COUNT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{DiaryEntry, EntryId, EntryPatch};
pub use model::schedule::{ScheduleId, ScheduleItem, SchedulePatch, ScheduleStatus};
pub use model::time::TimeOfDay;
pub use model::working_hours::WorkingHours;
pub use model::ValidationError;
pub use planner::{weekly_free_slots, FreeSlot};
pub use search::{search_document, SearchOutcome, SearchResults, SEARCH_RESULT_CAP};
pub use store::{
    ChangeKind, EntryStore, ImportSummary, KeyValuePort, MemoryKv, MergeSummary, SqliteKv,
    StoreDocument, StoreError, StoreResult, STORAGE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
