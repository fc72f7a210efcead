//! REST collaborator client for the dashboard backend.
//!
//! This crate owns everything that touches the wire: the JSON shapes of
//! the calendar and task endpoints, the HTTP client, the explicit
//! credential [`Session`], and the normalization from wire records to the
//! unified [`agendash_core::DayEvent`] list.

pub mod client;
pub mod error;
pub mod normalize;
pub mod session;
pub mod types;

pub use client::{DEFAULT_TIMEOUT, DashboardClient, month_range};
pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use normalize::{day_of_month, entry_to_event, merge_month, task_to_event};
pub use session::Session;
pub use types::{CalendarEntry, EventPayload, TaskRecord};
