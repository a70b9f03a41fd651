//! Month-grid calendar computation.
//!
//! # Responsibility
//! - Produce the fixed 42-cell month view consumed by renderers.
//! - Navigate months with year rollover handled in one place.
//!
//! # Invariants
//! - Grid generation is pure: same inputs, same cells, same order.
//! - The 1st of the requested month always appears in its grid.

pub mod grid;

pub use grid::{local_today, month_grid, CalendarCell, MonthCursor, GRID_CELL_COUNT};
