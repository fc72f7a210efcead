//! Unified event types for the calendar panel.
//!
//! This module provides the display-level event representation:
//! - [`EventKind`]: the category of an event (persisted kinds plus the
//!   client-only `Today` and `Task` kinds)
//! - [`EventSource`]: where an event came from (calendar store, task
//!   deadline, or the synthetic today marker)
//! - [`DayEvent`]: one merged, display-ready event pinned to a day of the
//!   displayed month

use serde::{Deserialize, Serialize};

/// The category of a calendar event.
///
/// `Meeting`, `Deadline`, `Presentation` and `Review` are the kinds the
/// backend persists. `Today` and `Task` exist only in the merged display
/// list and are never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Meeting,
    Deadline,
    Presentation,
    Review,
    /// Synthetic marker for the real current date.
    Today,
    /// Derived from a task deadline; read-only in this view.
    Task,
}

impl EventKind {
    /// Returns a human-readable name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Meeting => "Meeting",
            Self::Deadline => "Deadline",
            Self::Presentation => "Presentation",
            Self::Review => "Review",
            Self::Today => "Today",
            Self::Task => "Task",
        }
    }

    /// Returns the wire value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Deadline => "deadline",
            Self::Presentation => "presentation",
            Self::Review => "review",
            Self::Today => "today",
            Self::Task => "task",
        }
    }

    /// Returns true if the backend stores events of this kind.
    pub fn is_persisted(&self) -> bool {
        !matches!(self, Self::Today | Self::Task)
    }

    /// Parses a wire `type` value.
    ///
    /// Unknown values fold to `Review`; the view has no styling rule for
    /// anything else.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "meeting" => Self::Meeting,
            "deadline" => Self::Deadline,
            "presentation" => Self::Presentation,
            "today" => Self::Today,
            "task" => Self::Task,
            _ => Self::Review,
        }
    }

    /// One-character marker used in the grid rendering.
    pub fn marker(&self) -> char {
        match self {
            Self::Meeting => 'M',
            Self::Deadline => 'D',
            Self::Presentation => 'P',
            Self::Review => 'R',
            Self::Today => '*',
            Self::Task => 'T',
        }
    }
}

/// Normalizes a human-facing category label into a persisted [`EventKind`].
///
/// The form's category select offers more labels than the backend has
/// kinds; the extra labels ("Personal", "Schedule", "Other") and anything
/// unrecognized fold to `Review`.
pub fn kind_from_category_label(label: &str) -> EventKind {
    match label.trim().to_ascii_lowercase().as_str() {
        "meeting" => EventKind::Meeting,
        "deadline" => EventKind::Deadline,
        "presentation" => EventKind::Presentation,
        "review" | "personal" | "schedule" | "other" => EventKind::Review,
        _ => EventKind::Review,
    }
}

/// Returns the category label to prefill when editing an event of `kind`.
///
/// Returns `None` for kinds that never entered through the form.
pub fn category_label_for_kind(kind: EventKind) -> Option<&'static str> {
    match kind {
        EventKind::Meeting => Some("Meeting"),
        EventKind::Deadline => Some("Deadline"),
        EventKind::Presentation => Some("Presentation"),
        EventKind::Review => Some("Review"),
        EventKind::Today | EventKind::Task => None,
    }
}

/// Where a unified event came from.
///
/// Calendar ids and task ids are drawn from different tables and can
/// collide numerically; the discriminant keeps the namespaces apart, and
/// the synthetic today marker needs no sentinel id at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum EventSource {
    /// A persisted calendar entry.
    Calendar { id: i64 },
    /// A task deadline, referenced by its owning project and task.
    Task { project_id: i64, task_id: i64 },
    /// The synthetic marker for the real current date.
    Today,
}

impl EventSource {
    /// Returns true if this event is derived from a task deadline.
    pub fn is_task(&self) -> bool {
        matches!(self, Self::Task { .. })
    }

    /// Returns true if this is the synthetic today marker.
    pub fn is_today(&self) -> bool {
        matches!(self, Self::Today)
    }

    /// Returns the calendar store id, if this is a calendar entry.
    pub fn calendar_id(&self) -> Option<i64> {
        match self {
            Self::Calendar { id } => Some(*id),
            _ => None,
        }
    }

    /// A collision-free key for rendering and deduplication.
    pub fn render_key(&self) -> String {
        match self {
            Self::Calendar { id } => format!("cal:{}", id),
            Self::Task {
                project_id,
                task_id,
            } => format!("task:{}:{}", project_id, task_id),
            Self::Today => "today".to_string(),
        }
    }
}

/// A merged, display-ready event for one day of the displayed month.
///
/// This is pure derived state: the list of `DayEvent`s for a month is
/// recomputed from fresh server data on every month change or refetch and
/// is never persisted itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEvent {
    /// Where the event came from.
    pub source: EventSource,
    /// Day of the displayed month, 1..=days-in-month.
    pub day: u32,
    /// Display title.
    pub title: String,
    /// Event category.
    pub kind: EventKind,
    /// Optional "HH:MM" time; `None` means unspecified.
    pub time: Option<String>,
    /// Optional free-text memo.
    pub memo: Option<String>,
}

impl DayEvent {
    /// Creates a new event with the required fields.
    pub fn new(source: EventSource, day: u32, title: impl Into<String>, kind: EventKind) -> Self {
        Self {
            source,
            day,
            title: title.into(),
            kind,
            time: None,
            memo: None,
        }
    }

    /// Creates the synthetic today marker for the given day.
    pub fn today_marker(day: u32) -> Self {
        Self::new(EventSource::Today, day, "Today", EventKind::Today)
    }

    /// Builder method to set the time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Builder method to set the memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Returns true if this event is derived from a task deadline.
    pub fn is_task(&self) -> bool {
        self.source.is_task()
    }

    /// Returns true if this is the synthetic today marker.
    pub fn is_today_marker(&self) -> bool {
        self.source.is_today()
    }

    /// Returns true if the panel may edit or delete this event.
    ///
    /// Task-sourced events are managed through the task surface and the
    /// today marker is not persisted, so only calendar entries qualify.
    pub fn is_editable(&self) -> bool {
        matches!(self.source, EventSource::Calendar { .. })
    }

    /// A collision-free key for rendering lists of mixed-source events.
    pub fn render_key(&self) -> String {
        self.source.render_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod event_kind {
        use super::*;

        #[test]
        fn wire_roundtrip() {
            for kind in [
                EventKind::Meeting,
                EventKind::Deadline,
                EventKind::Presentation,
                EventKind::Review,
                EventKind::Today,
                EventKind::Task,
            ] {
                assert_eq!(EventKind::from_wire(kind.as_str()), kind);
            }
        }

        #[test]
        fn unknown_wire_value_folds_to_review() {
            assert_eq!(EventKind::from_wire("standup"), EventKind::Review);
            assert_eq!(EventKind::from_wire(""), EventKind::Review);
        }

        #[test]
        fn persisted_kinds() {
            assert!(EventKind::Meeting.is_persisted());
            assert!(EventKind::Review.is_persisted());
            assert!(!EventKind::Today.is_persisted());
            assert!(!EventKind::Task.is_persisted());
        }

        #[test]
        fn serde_uses_snake_case() {
            let json = serde_json::to_string(&EventKind::Presentation).unwrap();
            assert_eq!(json, "\"presentation\"");
        }
    }

    mod category_mapping {
        use super::*;

        #[test]
        fn known_labels() {
            assert_eq!(kind_from_category_label("Meeting"), EventKind::Meeting);
            assert_eq!(kind_from_category_label("deadline"), EventKind::Deadline);
            assert_eq!(
                kind_from_category_label("  Presentation "),
                EventKind::Presentation
            );
            assert_eq!(kind_from_category_label("Review"), EventKind::Review);
        }

        #[test]
        fn extra_labels_fold_to_review() {
            assert_eq!(kind_from_category_label("Personal"), EventKind::Review);
            assert_eq!(kind_from_category_label("Schedule"), EventKind::Review);
            assert_eq!(kind_from_category_label("Other"), EventKind::Review);
            assert_eq!(kind_from_category_label("whatever"), EventKind::Review);
        }

        #[test]
        fn labels_roundtrip_for_persisted_kinds() {
            for kind in [
                EventKind::Meeting,
                EventKind::Deadline,
                EventKind::Presentation,
                EventKind::Review,
            ] {
                let label = category_label_for_kind(kind).unwrap();
                assert_eq!(kind_from_category_label(label), kind);
            }
            assert!(category_label_for_kind(EventKind::Today).is_none());
            assert!(category_label_for_kind(EventKind::Task).is_none());
        }
    }

    mod event_source {
        use super::*;

        #[test]
        fn predicates() {
            let cal = EventSource::Calendar { id: 7 };
            let task = EventSource::Task {
                project_id: 2,
                task_id: 7,
            };

            assert!(!cal.is_task());
            assert_eq!(cal.calendar_id(), Some(7));
            assert!(task.is_task());
            assert!(task.calendar_id().is_none());
            assert!(EventSource::Today.is_today());
        }

        #[test]
        fn render_keys_disambiguate_colliding_ids() {
            // Calendar id 7 and task id 7 share a numeric value but not a key.
            let cal = EventSource::Calendar { id: 7 };
            let task = EventSource::Task {
                project_id: 2,
                task_id: 7,
            };
            assert_ne!(cal.render_key(), task.render_key());
            assert_eq!(cal.render_key(), "cal:7");
            assert_eq!(task.render_key(), "task:2:7");
            assert_eq!(EventSource::Today.render_key(), "today");
        }
    }

    mod day_event {
        use super::*;

        #[test]
        fn builder() {
            let event = DayEvent::new(
                EventSource::Calendar { id: 1 },
                5,
                "Team sync",
                EventKind::Meeting,
            )
            .with_time("14:00")
            .with_memo("weekly");

            assert_eq!(event.day, 5);
            assert_eq!(event.time.as_deref(), Some("14:00"));
            assert_eq!(event.memo.as_deref(), Some("weekly"));
            assert!(event.is_editable());
        }

        #[test]
        fn today_marker_shape() {
            let marker = DayEvent::today_marker(20);
            assert_eq!(marker.day, 20);
            assert_eq!(marker.kind, EventKind::Today);
            assert!(marker.is_today_marker());
            assert!(!marker.is_editable());
            assert!(marker.time.is_none());
        }

        #[test]
        fn task_events_are_read_only() {
            let event = DayEvent::new(
                EventSource::Task {
                    project_id: 1,
                    task_id: 3,
                },
                12,
                "Ship report",
                EventKind::Task,
            );
            assert!(event.is_task());
            assert!(!event.is_editable());
        }

        #[test]
        fn serde_roundtrip() {
            let event = DayEvent::new(
                EventSource::Calendar { id: 9 },
                28,
                "Client call",
                EventKind::Meeting,
            )
            .with_time("11:00");

            let json = serde_json::to_string(&event).unwrap();
            let parsed: DayEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }
    }
}
