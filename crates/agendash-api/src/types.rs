//! Wire types for the dashboard REST endpoints.
//!
//! These mirror the backend's JSON shapes verbatim: `/api/calendar`
//! responses and request bodies, and `/api/tasks` records (camelCase
//! field names on the wire).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted calendar entry as returned by `GET /api/calendar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Row id in the calendar store.
    pub id: i64,
    /// ISO `YYYY-MM-DD` event date.
    pub date: String,
    /// Display title.
    pub title: String,
    /// Wire kind string (`meeting`, `deadline`, `presentation`, `review`).
    #[serde(rename = "type")]
    pub kind: String,
    /// "HH:MM" or empty when unspecified.
    #[serde(default)]
    pub time: String,
    /// Free-text memo, possibly empty or absent.
    #[serde(default)]
    pub memo: String,
}

/// Request body for `POST /api/calendar` and `PUT /api/calendar/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// ISO `YYYY-MM-DD` event date.
    pub date: String,
    /// Display title, already trimmed.
    pub title: String,
    /// Wire kind string; always one of the four persisted kinds.
    #[serde(rename = "type")]
    pub kind: String,
    /// "HH:MM" or empty when unspecified.
    pub time: String,
    /// Free-text memo; empty when unset.
    pub memo: String,
}

/// One task record as returned by `GET /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Owning project id.
    pub project_id: i64,
    /// Task id within the task store.
    pub task_id: i64,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the task is done.
    pub completed: bool,
    /// Priority label (opaque to this client).
    #[serde(default)]
    pub priority: Option<String>,
    /// Optional deadline date.
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    /// Creation timestamp, opaque to this client.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update timestamp, opaque to this client.
    #[serde(default)]
    pub updated_at: Option<String>,
}
