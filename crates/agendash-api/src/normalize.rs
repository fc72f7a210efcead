//! Wire-to-unified event conversion.
//!
//! The conversion pipeline from backend records to the display-ready
//! [`DayEvent`] list for one month:
//! 1. Calendar entries keep only their day-of-month (the query range
//!    already pinned the month and year)
//! 2. Tasks contribute one read-only event per deadline inside the
//!    displayed month
//! 3. Lists concatenate calendar-first, then the today marker is injected

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use agendash_core::{DayEvent, EventKind, EventSource, MonthCursor, inject_today_marker};

use crate::types::{CalendarEntry, TaskRecord};

/// Extracts the day-of-month from an ISO `YYYY-MM-DD` string.
///
/// Returns `None` when the string is not a valid date.
pub fn day_of_month(iso: &str) -> Option<u32> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .map(|d| d.day())
}

/// Converts a calendar entry to a unified event.
///
/// Entries whose date does not parse or whose day falls outside
/// 1..=`days_in_month` are dropped; they cannot be placed on the grid.
pub fn entry_to_event(entry: &CalendarEntry, days_in_month: u32) -> Option<DayEvent> {
    let Some(day) = day_of_month(&entry.date) else {
        warn!(id = entry.id, date = %entry.date, "calendar entry with unparseable date dropped");
        return None;
    };
    if day > days_in_month {
        warn!(id = entry.id, day, "calendar entry outside displayed month dropped");
        return None;
    }

    let mut event = DayEvent::new(
        EventSource::Calendar { id: entry.id },
        day,
        entry.title.clone(),
        EventKind::from_wire(&entry.kind),
    );
    if !entry.time.is_empty() {
        event = event.with_time(entry.time.clone());
    }
    if !entry.memo.is_empty() {
        event = event.with_memo(entry.memo.clone());
    }
    Some(event)
}

/// Converts a task record to a unified deadline event.
///
/// Only tasks whose deadline falls inside the displayed month contribute;
/// the resulting event is task-sourced and therefore read-only in the
/// calendar view.
pub fn task_to_event(task: &TaskRecord, cursor: MonthCursor) -> Option<DayEvent> {
    let deadline = task.deadline?;
    if !cursor.contains(deadline) {
        return None;
    }

    let mut event = DayEvent::new(
        EventSource::Task {
            project_id: task.project_id,
            task_id: task.task_id,
        },
        deadline.day(),
        task.title.clone(),
        EventKind::Task,
    );
    if let Some(ref description) = task.description {
        if !description.is_empty() {
            event = event.with_memo(description.clone());
        }
    }
    Some(event)
}

/// Assembles the unified event list for one month.
///
/// Calendar entries come first, task deadlines after them (so the grid's
/// one-marker-per-day rule favors calendar entries), and the synthetic
/// today marker is appended when `today` belongs to the displayed month.
pub fn merge_month(
    entries: &[CalendarEntry],
    tasks: &[TaskRecord],
    cursor: MonthCursor,
    today: NaiveDate,
) -> Vec<DayEvent> {
    let days_in_month = cursor.days_in_month();

    let mut events: Vec<DayEvent> = entries
        .iter()
        .filter_map(|e| entry_to_event(e, days_in_month))
        .collect();
    events.extend(tasks.iter().filter_map(|t| task_to_event(t, cursor)));

    inject_today_marker(&mut events, cursor, today);
    events
}
