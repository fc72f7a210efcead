//! Core types: month grid, unified events, merge helpers, formatting

pub mod event;
pub mod format;
pub mod grid;
pub mod merge;
pub mod tracing;

pub use event::{
    DayEvent, EventKind, EventSource, category_label_for_kind, kind_from_category_label,
};
pub use format::{FormatOptions, GridFormatter, WEEKDAYS};
pub use grid::{MONTH_NAMES, MonthCursor, MonthGrid};
pub use merge::{DEFAULT_UPCOMING_LIMIT, inject_today_marker, marker_for_day, upcoming_events};
pub use tracing::{LogFormat, TracingConfig, TracingError, init_tracing};
