//! Event form model and validation.
//!
//! The editing modal holds raw strings exactly as the user typed them;
//! validation runs on submit and reports the first failing rule only, in
//! the order date, title, category. A valid form yields an [`EventDraft`]
//! ready to be sent to the backend.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use agendash_api::EventPayload;
use agendash_core::{
    DayEvent, EventKind, MonthCursor, category_label_for_kind, kind_from_category_label,
};

/// Placeholder value of the category select before the user picks one.
pub const CATEGORY_PLACEHOLDER: &str = "-- select --";

/// 24-hour "HH:MM" time strings.
static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("invalid time regex"));

/// A validation failure. Surfaced inline in the modal; no network call is
/// made for an invalid form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please pick a date.")]
    MissingDate,
    #[error("The date must be YYYY-MM-DD.")]
    InvalidDate,
    #[error("Please enter a title.")]
    MissingTitle,
    #[error("Please choose an event type.")]
    MissingCategory,
    #[error("The time must be HH:MM (24-hour).")]
    InvalidTime,
}

/// Raw form state of the editing modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    /// ISO `YYYY-MM-DD` date string.
    pub date: String,
    /// Title as typed; trimmed at validation time.
    pub title: String,
    /// Human-facing category label, or [`CATEGORY_PLACEHOLDER`].
    pub category: String,
    /// "HH:MM" or empty.
    pub time: String,
    /// Free-text memo.
    pub memo: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            title: String::new(),
            category: CATEGORY_PLACEHOLDER.to_string(),
            time: String::new(),
            memo: String::new(),
        }
    }
}

impl EventForm {
    /// Prefills the form for editing an existing calendar event.
    ///
    /// The date is reassembled from the displayed month and the event's
    /// day; the category label is the reverse of the submit-time mapping.
    pub fn prefill(event: &DayEvent, cursor: MonthCursor) -> Self {
        Self {
            date: format!(
                "{:04}-{:02}-{:02}",
                cursor.year,
                cursor.month_number(),
                event.day
            ),
            title: event.title.clone(),
            category: category_label_for_kind(event.kind)
                .unwrap_or(CATEGORY_PLACEHOLDER)
                .to_string(),
            time: event.time.clone().unwrap_or_default(),
            memo: event.memo.clone().unwrap_or_default(),
        }
    }

    /// Validates the form and builds the draft to persist.
    ///
    /// Rules run in order and only the first failure is reported: the
    /// date must be present and well-formed, the title non-empty after
    /// trimming, the category actually selected. A supplied time must be
    /// a 24-hour "HH:MM".
    pub fn validate(&self) -> Result<EventDraft, ValidationError> {
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate)?;

        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        if self.category.trim().is_empty() || self.category == CATEGORY_PLACEHOLDER {
            return Err(ValidationError::MissingCategory);
        }
        let kind = kind_from_category_label(&self.category);

        let time = self.time.trim();
        if !time.is_empty() && !TIME_REGEX.is_match(time) {
            return Err(ValidationError::InvalidTime);
        }

        let memo = self.memo.trim();
        Ok(EventDraft {
            date,
            title: title.to_string(),
            kind,
            time: (!time.is_empty()).then(|| time.to_string()),
            memo: (!memo.is_empty()).then(|| memo.to_string()),
        })
    }
}

/// A validated event ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Event date.
    pub date: NaiveDate,
    /// Trimmed title.
    pub title: String,
    /// One of the four persisted kinds.
    pub kind: EventKind,
    /// Optional "HH:MM" time.
    pub time: Option<String>,
    /// Optional memo.
    pub memo: Option<String>,
}

impl EventDraft {
    /// Builds the request body for the create/update endpoints.
    pub fn to_payload(&self) -> EventPayload {
        EventPayload {
            date: self.date.format("%Y-%m-%d").to_string(),
            title: self.title.clone(),
            kind: self.kind.as_str().to_string(),
            time: self.time.clone().unwrap_or_default(),
            memo: self.memo.clone().unwrap_or_default(),
        }
    }
}
