//! The calendar panel: form model, mode machine, fetch/merge cycle.

pub mod form;
pub mod panel;

pub use form::{CATEGORY_PLACEHOLDER, EventDraft, EventForm, ValidationError};
pub use panel::{CalendarPanel, EditSession, PanelMode};
