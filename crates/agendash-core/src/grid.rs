//! Month navigation and grid-cell generation.
//!
//! This module provides [`MonthCursor`] for the displayed (year, month)
//! pair and [`MonthGrid`] for the cell sequence a month view renders.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The displayed month of the calendar panel.
///
/// The month index is 0-based (0 = January … 11 = December), matching the
/// contract of the grid operations; [`MonthCursor::month_number`] bridges
/// to the 1-based months chrono and the wire format use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthCursor {
    /// Calendar year.
    pub year: i32,
    /// 0-based month index, 0..=11.
    pub month0: u32,
}

impl MonthCursor {
    /// Creates a new cursor.
    ///
    /// # Panics
    ///
    /// Panics if `month0` is not in 0..=11.
    pub fn new(year: i32, month0: u32) -> Self {
        assert!(month0 < 12, "month index must be in 0..=11");
        Self { year, month0 }
    }

    /// Creates a cursor for the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    /// Returns the 1-based month number (1..=12).
    pub fn month_number(&self) -> u32 {
        self.month0 + 1
    }

    /// Returns the cursor shifted by `delta` months, wrapping across
    /// year boundaries: month 11 + 1 is month 0 of the next year, month 0
    /// − 1 is month 11 of the previous year.
    pub fn shifted(&self, delta: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month0) + i64::from(delta);
        Self {
            year: total.div_euclid(12) as i32,
            month0: total.rem_euclid(12) as u32,
        }
    }

    /// The month after this one.
    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    /// The month before this one.
    pub fn prev(&self) -> Self {
        self.shifted(-1)
    }

    /// The first day of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), 1).expect("valid first of month")
    }

    /// The last day of this month (day 0 of the next month).
    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .expect("valid last of month")
    }

    /// Number of days in this month, leap years included.
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Weekday index of day 1, 0 = Sunday … 6 = Saturday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Returns true if `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// Display label, e.g. "January 2026".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }
}

/// Full month names indexed by 0-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The ordered cell sequence for one displayed month.
///
/// The first `first_weekday` cells are `None` placeholders (blank leading
/// cells before day 1), the rest are `Some(1..=days_in_month)` in order.
/// Building the grid is a pure function of the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cursor: MonthCursor,
    cells: Vec<Option<u32>>,
}

impl MonthGrid {
    /// Builds the grid for the given month.
    pub fn build(cursor: MonthCursor) -> Self {
        let leading = cursor.first_weekday() as usize;
        let days = cursor.days_in_month();

        let mut cells = Vec::with_capacity(leading + days as usize);
        cells.resize(leading, None);
        cells.extend((1..=days).map(Some));

        Self { cursor, cells }
    }

    /// The month this grid was built for.
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// All cells in render order.
    pub fn cells(&self) -> &[Option<u32>] {
        &self.cells
    }

    /// Cells grouped into rows of seven; the last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(7)
    }
}
