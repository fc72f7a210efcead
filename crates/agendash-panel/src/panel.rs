//! The calendar panel: mode machine, month navigation, fetch/merge cycle.
//!
//! The panel is the single owner of the displayed month, the merged event
//! list and the editing modal state. All mutation is write-then-resync:
//! after a successful create/update/delete the displayed month is
//! refetched rather than patched, so the view never diverges from the
//! store after a successful write.

use chrono::NaiveDate;
use tracing::{info, warn};

use agendash_api::{ApiResult, CalendarEntry, DashboardClient, TaskRecord, merge_month};
use agendash_core::{DayEvent, EventSource, MonthCursor, MonthGrid};

use crate::form::{EventDraft, EventForm};

/// The two modes of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMode {
    /// Grid shown, modal closed.
    Browsing,
    /// Modal open, creating or updating an event.
    Editing(EditSession),
}

/// State of an open editing modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// The form being edited.
    pub form: EventForm,
    /// Calendar id of the event being updated; `None` when creating.
    pub target: Option<i64>,
    /// Inline validation or write error, shown next to the form.
    pub error: Option<String>,
}

impl EditSession {
    fn create() -> Self {
        Self {
            form: EventForm::default(),
            target: None,
            error: None,
        }
    }

    fn update(id: i64, form: EventForm) -> Self {
        Self {
            form,
            target: Some(id),
            error: None,
        }
    }

    /// Returns true if this session updates an existing event.
    pub fn is_update(&self) -> bool {
        self.target.is_some()
    }
}

/// The calendar panel.
pub struct CalendarPanel {
    cursor: MonthCursor,
    events: Vec<DayEvent>,
    tasks: Vec<TaskRecord>,
    mode: PanelMode,
    last_error: Option<String>,
}

impl CalendarPanel {
    /// Creates a panel displaying the given month, with no events loaded.
    pub fn new(cursor: MonthCursor) -> Self {
        Self {
            cursor,
            events: Vec::new(),
            tasks: Vec::new(),
            mode: PanelMode::Browsing,
            last_error: None,
        }
    }

    /// The displayed month.
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// The merged event list for the displayed month.
    pub fn events(&self) -> &[DayEvent] {
        &self.events
    }

    /// The current panel mode.
    pub fn mode(&self) -> &PanelMode {
        &self.mode
    }

    /// The most recent fetch/delete error, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Builds the cell grid for the displayed month.
    ///
    /// Grid generation is independent of the fetches; it renders even
    /// when every event source failed.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.cursor)
    }

    /// Moves the displayed month back by one. The caller refreshes next.
    pub fn prev_month(&mut self) {
        self.cursor = self.cursor.prev();
    }

    /// Moves the displayed month forward by one. The caller refreshes next.
    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    /// Replaces the cached task list used by the merge.
    pub fn set_tasks(&mut self, tasks: Vec<TaskRecord>) {
        self.tasks = tasks;
    }

    /// Applies the result of a month fetch that was issued for
    /// `issued_for`.
    ///
    /// Returns false and changes nothing when the displayed month has
    /// moved on since the fetch was issued - a stale response must not
    /// overwrite a later month's list. A failed fetch falls back to an
    /// empty calendar list so task events and the grid still render.
    pub fn apply_month_data(
        &mut self,
        issued_for: MonthCursor,
        calendar: ApiResult<Vec<CalendarEntry>>,
        today: NaiveDate,
    ) -> bool {
        if issued_for != self.cursor {
            warn!(
                issued_for = %issued_for.label(),
                displayed = %self.cursor.label(),
                "discarding stale month fetch"
            );
            return false;
        }

        let entries = match calendar {
            Ok(entries) => {
                self.last_error = None;
                entries
            }
            Err(e) => {
                warn!(error = %e, "calendar fetch failed, rendering without calendar entries");
                self.last_error = Some(e.to_string());
                Vec::new()
            }
        };

        self.events = merge_month(&entries, &self.tasks, self.cursor, today);
        true
    }

    /// Refetches the task list and the displayed month, then remerges.
    ///
    /// Both fetches are fail-soft: a failed task fetch keeps the previous
    /// task list, a failed calendar fetch merges an empty one. The grid
    /// always renders.
    pub async fn refresh(&mut self, client: &DashboardClient, today: NaiveDate) -> bool {
        let issued_for = self.cursor;

        match client.tasks().await {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => warn!(error = %e, "task fetch failed, keeping previous task list"),
        }

        let calendar = client.month_events(issued_for).await;
        self.apply_month_data(issued_for, calendar, today)
    }

    /// Opens the modal in create mode with a blank form.
    pub fn open_create(&mut self) {
        self.mode = PanelMode::Editing(EditSession::create());
    }

    /// Opens the modal in update mode for the event with `source`.
    ///
    /// Task-sourced events and the today marker are not editable here;
    /// for those this is a no-op and the panel stays in browsing mode.
    /// Returns true if the modal opened.
    pub fn open_edit(&mut self, source: EventSource) -> bool {
        let Some(event) = self.events.iter().find(|e| e.source == source) else {
            return false;
        };
        if !event.is_editable() {
            info!(key = %event.render_key(), "event is read-only in the calendar view");
            return false;
        }
        let id = event
            .source
            .calendar_id()
            .expect("editable events are calendar-sourced");

        let form = EventForm::prefill(event, self.cursor);
        self.mode = PanelMode::Editing(EditSession::update(id, form));
        true
    }

    /// Closes the modal, discarding the form state.
    pub fn cancel_edit(&mut self) {
        self.mode = PanelMode::Browsing;
    }

    /// Validates the open form and returns the draft to persist.
    ///
    /// On a validation failure the inline error is set, no network call
    /// is made, and the modal stays open. Returns the update target and
    /// draft otherwise.
    pub fn prepare_submit(&mut self) -> Option<(Option<i64>, EventDraft)> {
        let PanelMode::Editing(ref mut session) = self.mode else {
            return None;
        };

        match session.form.validate() {
            Ok(draft) => {
                session.error = None;
                Some((session.target, draft))
            }
            Err(e) => {
                session.error = Some(e.to_string());
                None
            }
        }
    }

    /// Submits the open form: validate, persist, resync, close.
    ///
    /// Invalid forms and failed writes keep the modal open with an inline
    /// error. On success the panel returns to browsing and the displayed
    /// month is refetched. Returns true when the write went through.
    pub async fn submit(&mut self, client: &DashboardClient, today: NaiveDate) -> bool {
        let Some((target, draft)) = self.prepare_submit() else {
            return false;
        };

        let payload = draft.to_payload();
        let result = match target {
            Some(id) => client.update_event(id, &payload).await,
            None => client.create_event(&payload).await,
        };

        match result {
            Ok(()) => {
                self.mode = PanelMode::Browsing;
                self.refresh(client, today).await;
                true
            }
            Err(e) => {
                warn!(error = %e, "event write failed");
                if let PanelMode::Editing(ref mut session) = self.mode {
                    session.error = Some(e.to_string());
                }
                false
            }
        }
    }

    /// Removes a calendar event from the local list ahead of the DELETE.
    ///
    /// Returns true if an event was removed.
    pub fn remove_event_locally(&mut self, id: i64) -> bool {
        let before = self.events.len();
        self.events
            .retain(|e| e.source != EventSource::Calendar { id });
        self.events.len() != before
    }

    /// Deletes a calendar event: optimistic local removal, DELETE, then a
    /// reconciling refetch regardless of the outcome.
    ///
    /// Returns true when the backend confirmed the delete.
    pub async fn delete_event(
        &mut self,
        client: &DashboardClient,
        id: i64,
        today: NaiveDate,
    ) -> bool {
        self.remove_event_locally(id);

        let deleted = match client.delete_event(id).await {
            Ok(()) => true,
            Err(e) => {
                warn!(id, error = %e, "event delete failed");
                self.last_error = Some(e.to_string());
                false
            }
        };

        self.refresh(client, today).await;
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agendash_api::ApiError;
    use agendash_core::EventKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: i64, iso: &str) -> CalendarEntry {
        CalendarEntry {
            id,
            date: iso.to_string(),
            title: format!("entry-{}", id),
            kind: "meeting".to_string(),
            time: String::new(),
            memo: String::new(),
        }
    }

    fn task(task_id: i64, deadline: NaiveDate) -> TaskRecord {
        TaskRecord {
            project_id: 1,
            task_id,
            title: format!("task-{}", task_id),
            description: None,
            completed: false,
            priority: None,
            deadline: Some(deadline),
            created_at: None,
            updated_at: None,
        }
    }

    fn loaded_panel() -> CalendarPanel {
        let mut panel = CalendarPanel::new(MonthCursor::new(2026, 0));
        panel.set_tasks(vec![task(2, date(2026, 1, 12))]);
        panel.apply_month_data(
            panel.cursor(),
            Ok(vec![entry(1, "2026-01-05")]),
            date(2026, 1, 20),
        );
        panel
    }

    mod fetch_cycle {
        use super::*;

        #[test]
        fn apply_merges_all_three_sources() {
            let panel = loaded_panel();
            let kinds: Vec<_> = panel.events().iter().map(|e| e.kind).collect();
            assert_eq!(
                kinds,
                vec![EventKind::Meeting, EventKind::Task, EventKind::Today]
            );
        }

        #[test]
        fn stale_response_is_discarded() {
            let mut panel = loaded_panel();
            let stale_cursor = panel.cursor();
            panel.next_month();

            let applied = panel.apply_month_data(
                stale_cursor,
                Ok(vec![entry(9, "2026-01-07")]),
                date(2026, 1, 20),
            );

            assert!(!applied);
            // The January list survives untouched under the February cursor.
            assert!(panel.events().iter().all(|e| e.source != EventSource::Calendar { id: 9 }));
        }

        #[test]
        fn failed_fetch_still_merges_tasks_and_today() {
            let mut panel = CalendarPanel::new(MonthCursor::new(2026, 0));
            panel.set_tasks(vec![task(2, date(2026, 1, 12))]);

            let applied = panel.apply_month_data(
                panel.cursor(),
                Err(ApiError::network("connection failed")),
                date(2026, 1, 20),
            );

            assert!(applied);
            assert!(panel.last_error().is_some());
            let kinds: Vec<_> = panel.events().iter().map(|e| e.kind).collect();
            assert_eq!(kinds, vec![EventKind::Task, EventKind::Today]);
            // The grid renders regardless.
            assert_eq!(panel.grid().cells().len(), 4 + 31);
        }

        #[test]
        fn successful_apply_clears_previous_error() {
            let mut panel = CalendarPanel::new(MonthCursor::new(2026, 0));
            panel.apply_month_data(
                panel.cursor(),
                Err(ApiError::server("boom")),
                date(2026, 1, 20),
            );
            assert!(panel.last_error().is_some());

            panel.apply_month_data(panel.cursor(), Ok(vec![]), date(2026, 1, 20));
            assert!(panel.last_error().is_none());
        }

        #[test]
        fn month_navigation_moves_cursor() {
            let mut panel = CalendarPanel::new(MonthCursor::new(2026, 0));
            panel.prev_month();
            assert_eq!(panel.cursor(), MonthCursor::new(2025, 11));
            panel.next_month();
            panel.next_month();
            assert_eq!(panel.cursor(), MonthCursor::new(2026, 1));
        }
    }

    mod mode_machine {
        use super::*;

        #[test]
        fn starts_browsing() {
            let panel = CalendarPanel::new(MonthCursor::new(2026, 0));
            assert_eq!(*panel.mode(), PanelMode::Browsing);
        }

        #[test]
        fn open_create_enters_editing_with_blank_form() {
            let mut panel = loaded_panel();
            panel.open_create();

            let PanelMode::Editing(session) = panel.mode() else {
                panic!("expected editing mode");
            };
            assert!(!session.is_update());
            assert_eq!(session.form, EventForm::default());
            assert!(session.error.is_none());
        }

        #[test]
        fn open_edit_prefills_calendar_event() {
            let mut panel = loaded_panel();
            assert!(panel.open_edit(EventSource::Calendar { id: 1 }));

            let PanelMode::Editing(session) = panel.mode() else {
                panic!("expected editing mode");
            };
            assert_eq!(session.target, Some(1));
            assert_eq!(session.form.date, "2026-01-05");
            assert_eq!(session.form.title, "entry-1");
        }

        #[test]
        fn open_edit_is_noop_for_task_events() {
            let mut panel = loaded_panel();
            let opened = panel.open_edit(EventSource::Task {
                project_id: 1,
                task_id: 2,
            });

            assert!(!opened);
            assert_eq!(*panel.mode(), PanelMode::Browsing);
        }

        #[test]
        fn open_edit_is_noop_for_today_marker() {
            let mut panel = loaded_panel();
            assert!(!panel.open_edit(EventSource::Today));
            assert_eq!(*panel.mode(), PanelMode::Browsing);
        }

        #[test]
        fn cancel_discards_form_state() {
            let mut panel = loaded_panel();
            panel.open_create();
            panel.cancel_edit();
            assert_eq!(*panel.mode(), PanelMode::Browsing);

            // Reopening starts from a blank form again.
            panel.open_create();
            let PanelMode::Editing(session) = panel.mode() else {
                panic!("expected editing mode");
            };
            assert_eq!(session.form, EventForm::default());
        }
    }

    mod submit_validation {
        use super::*;

        #[test]
        fn invalid_form_sets_inline_error_and_stays_editing() {
            let mut panel = loaded_panel();
            panel.open_create();

            // Blank form: the date rule fails first.
            assert!(panel.prepare_submit().is_none());

            let PanelMode::Editing(session) = panel.mode() else {
                panic!("expected editing mode");
            };
            assert_eq!(session.error.as_deref(), Some("Please pick a date."));
        }

        #[test]
        fn empty_title_reports_the_title_rule() {
            let mut panel = loaded_panel();
            panel.open_create();

            if let PanelMode::Editing(ref mut session) = panel.mode {
                assert!(session.error.is_none());
                session.form.date = "2026-01-09".to_string();
                session.form.category = "Meeting".to_string();
            }
            assert!(panel.prepare_submit().is_none());

            let PanelMode::Editing(session) = panel.mode() else {
                panic!("expected editing mode");
            };
            assert_eq!(session.error.as_deref(), Some("Please enter a title."));
        }

        #[test]
        fn valid_form_yields_draft_and_clears_error() {
            let mut panel = loaded_panel();
            assert!(panel.open_edit(EventSource::Calendar { id: 1 }));

            if let PanelMode::Editing(ref mut session) = panel.mode {
                session.form.category = "Review".to_string();
                session.error = Some("stale".to_string());
            }

            let (target, draft) = panel.prepare_submit().unwrap();
            assert_eq!(target, Some(1));
            assert_eq!(draft.kind, EventKind::Review);

            let PanelMode::Editing(session) = panel.mode() else {
                panic!("expected editing mode");
            };
            assert!(session.error.is_none());
        }

        #[test]
        fn prepare_submit_in_browsing_mode_is_none() {
            let mut panel = loaded_panel();
            assert!(panel.prepare_submit().is_none());
        }
    }

    mod delete {
        use super::*;

        #[test]
        fn optimistic_removal_only_touches_calendar_events() {
            let mut panel = loaded_panel();

            assert!(panel.remove_event_locally(1));
            assert!(panel.events().iter().all(|e| e.source != EventSource::Calendar { id: 1 }));
            // Task and today events survive.
            assert_eq!(panel.events().len(), 2);

            // Removing the same id again finds nothing.
            assert!(!panel.remove_event_locally(1));
        }

        #[test]
        fn task_id_collision_does_not_remove_task_event() {
            let mut panel = CalendarPanel::new(MonthCursor::new(2026, 0));
            panel.set_tasks(vec![task(7, date(2026, 1, 12))]);
            panel.apply_month_data(
                panel.cursor(),
                Ok(vec![entry(7, "2026-01-05")]),
                date(2026, 2, 1),
            );

            // Calendar id 7 and task id 7 collide numerically; only the
            // calendar entry goes away.
            assert!(panel.remove_event_locally(7));
            assert_eq!(panel.events().len(), 1);
            assert!(panel.events()[0].is_task());
        }
    }
}
