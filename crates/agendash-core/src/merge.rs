//! Reconciliation helpers for the merged month event list.
//!
//! The unified list for a month is assembled by the panel: calendar
//! entries first, task-deadline entries after them, then the synthetic
//! today marker via [`inject_today_marker`]. The helpers here operate on
//! that list: one grid marker per day and the sorted upcoming view.

use chrono::{Datelike, NaiveDate};

use crate::event::{DayEvent, EventKind};
use crate::grid::MonthCursor;

/// Default number of entries in the upcoming-events sidebar.
pub const DEFAULT_UPCOMING_LIMIT: usize = 8;

/// Appends the synthetic today marker to `events` when it belongs there.
///
/// The marker is added only when `today` falls in the displayed month and
/// the list does not already carry a `Today`-kind event, neither anywhere
/// in the list nor on today's day. At most one marker can therefore exist
/// per rendered month.
pub fn inject_today_marker(events: &mut Vec<DayEvent>, cursor: MonthCursor, today: NaiveDate) {
    if !cursor.contains(today) {
        return;
    }

    let day = today.day();
    let has_today_kind = events.iter().any(|e| e.kind == EventKind::Today);
    let has_today_on_day = events
        .iter()
        .any(|e| e.kind == EventKind::Today && e.day == day);
    if has_today_kind || has_today_on_day {
        return;
    }

    events.push(DayEvent::today_marker(day));
}

/// Returns the event whose marker a grid cell shows for `day`.
///
/// The grid displays at most one marker per day: the first match in
/// source order. Because the merged list is concatenated calendar-first,
/// calendar entries win ties against task entries. All events of the day
/// remain individually addressable through [`upcoming_events`].
pub fn marker_for_day(events: &[DayEvent], day: u32) -> Option<&DayEvent> {
    events.iter().find(|e| e.day == day)
}

/// The upcoming-events view over the merged list.
///
/// Excludes the today marker, sorts ascending by day (stable, so events
/// sharing a day keep their insertion order) and yields at most `limit`
/// entries. The iterator is finite and can be rebuilt from the same list
/// at any time.
pub fn upcoming_events(events: &[DayEvent], limit: usize) -> impl Iterator<Item = &DayEvent> {
    let mut upcoming: Vec<&DayEvent> = events
        .iter()
        .filter(|e| e.kind != EventKind::Today)
        .collect();
    upcoming.sort_by_key(|e| e.day);
    upcoming.into_iter().take(limit)
}
