//! Terminal output formatting for the month view.
//!
//! Renders a [`MonthGrid`] plus its merged event list into plain text for
//! the CLI: a month header, the weekday row, week-by-week day cells with
//! one event marker per day, and the upcoming-events block.

use serde::{Deserialize, Serialize};

use crate::event::DayEvent;
use crate::grid::{MONTH_NAMES, MonthCursor, MonthGrid};
use crate::merge::{self, DEFAULT_UPCOMING_LIMIT};

/// Two-letter weekday labels, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Configuration options for text output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Maximum number of entries in the upcoming block.
    pub upcoming_limit: usize,
    /// Whether day cells carry a per-kind event marker.
    pub show_markers: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            show_markers: true,
        }
    }
}

/// Formatter for the month grid and the upcoming list.
#[derive(Debug, Clone, Default)]
pub struct GridFormatter {
    options: FormatOptions,
}

impl GridFormatter {
    /// Creates a formatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Renders the month header, weekday row and day cells.
    ///
    /// Each cell is four characters wide: the right-aligned day number
    /// followed by the marker of the day's first event (or a space). Days
    /// before day 1 render as blank cells.
    pub fn format_month(&self, grid: &MonthGrid, events: &[DayEvent]) -> String {
        let mut out = String::new();

        let label = grid.cursor().label();
        out.push_str(format!("{:^28}", label).trim_end());
        out.push('\n');

        let header: String = WEEKDAYS.iter().map(|d| format!("{:>3} ", d)).collect();
        out.push_str(header.trim_end());
        out.push('\n');

        for week in grid.weeks() {
            let row: String = week.iter().map(|cell| self.format_cell(*cell, events)).collect();
            out.push_str(row.trim_end());
            out.push('\n');
        }

        out
    }

    fn format_cell(&self, cell: Option<u32>, events: &[DayEvent]) -> String {
        let Some(day) = cell else {
            return "    ".to_string();
        };

        let marker = if self.options.show_markers {
            merge::marker_for_day(events, day)
                .map(|e| e.kind.marker())
                .unwrap_or(' ')
        } else {
            ' '
        };
        format!("{:>3}{}", day, marker)
    }

    /// Renders the upcoming-events block, one line per entry.
    pub fn format_upcoming(&self, events: &[DayEvent], cursor: MonthCursor) -> String {
        let month = &MONTH_NAMES[cursor.month0 as usize][..3];
        let mut out = String::new();

        for event in merge::upcoming_events(events, self.options.upcoming_limit) {
            out.push_str(&format!(
                "{} {} {:>2}  {}",
                event.kind.marker(),
                month,
                event.day,
                event.title
            ));
            if let Some(ref time) = event.time {
                out.push_str(&format!(" · {}", time));
            }
            out.push('\n');
        }

        if out.is_empty() {
            out.push_str("no upcoming events\n");
        }
        out
    }
}
