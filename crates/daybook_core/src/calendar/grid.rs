//! Fixed 42-cell month grid generator.
//!
//! # Responsibility
//! - Compute the Sunday-started 6x7 date grid for one month.
//! - Classify each cell for rendering without touching the clock.
//!
//! # Invariants
//! - Exactly [`GRID_CELL_COUNT`] cells, consecutive calendar days.
//! - The grid starts on the Sunday on or before the 1st of the month.

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};

/// 6 rows of 7 days. The worst case (31-day month starting on Saturday)
/// needs 37 cells; the remaining rows keep the view height constant.
pub const GRID_CELL_COUNT: usize = 42;

/// A year/month position, month in `1..=12`.
///
/// Stored as the first day of the month so navigation arithmetic stays
/// total: `prev`/`next` roll the year over without a partial range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first_day: NaiveDate,
}

impl MonthCursor {
    /// Builds a cursor for `year`/`month`; `None` when `month` is outside
    /// `1..=12` or the year is outside chrono's range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// Cursor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    /// Month number in `1..=12`.
    pub fn month(self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first_day
    }

    /// Previous month; January rolls back to December of the prior year.
    pub fn prev(self) -> Self {
        Self {
            first_day: self.first_day - Months::new(1),
        }
    }

    /// Next month; December rolls over to January of the next year.
    pub fn next(self) -> Self {
        Self {
            first_day: self.first_day + Months::new(1),
        }
    }

    /// Whether `date` falls inside this cursor's month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Whether the cell belongs to the requested month, as opposed to the
    /// trailing/leading filler days of its neighbors.
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl CalendarCell {
    pub fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }

    pub fn is_saturday(&self) -> bool {
        self.date.weekday() == Weekday::Sat
    }
}

/// Generates the 42-cell grid for `cursor`.
///
/// `today` and `selected` are caller-supplied so the function stays pure;
/// pass [`local_today`] for the usual case.
pub fn month_grid(
    cursor: MonthCursor,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<CalendarCell> {
    let first = cursor.first_day();
    let lead_days = first.weekday().num_days_from_sunday();
    let grid_start = first - Days::new(u64::from(lead_days));

    grid_start
        .iter_days()
        .take(GRID_CELL_COUNT)
        .map(|date| CalendarCell {
            date,
            in_current_month: cursor.contains(date),
            is_today: date == today,
            is_selected: selected == Some(date),
        })
        .collect()
}

/// The process's current local calendar day.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::MonthCursor;

    #[test]
    fn cursor_rejects_invalid_month() {
        assert!(MonthCursor::new(2025, 0).is_none());
        assert!(MonthCursor::new(2025, 13).is_none());
        assert!(MonthCursor::new(2025, 12).is_some());
    }

    #[test]
    fn cursor_rolls_over_year_boundaries() {
        let december = MonthCursor::new(2024, 12).expect("valid month");
        let january = december.next();
        assert_eq!((january.year(), january.month()), (2025, 1));
        let back = january.prev();
        assert_eq!((back.year(), back.month()), (2024, 12));
    }
}
