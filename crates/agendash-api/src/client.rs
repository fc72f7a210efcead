//! HTTP client for the dashboard backend.
//!
//! A thin reqwest wrapper over the calendar and task endpoints. The
//! session is attached to every request; a 401 clears it before the
//! error surfaces, so the caller sees both the failure and a
//! de-authenticated session.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;

use agendash_core::MonthCursor;

use crate::error::{ApiError, ApiResult};
use crate::session::Session;
use crate::types::{CalendarEntry, EventPayload, TaskRecord};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the dashboard REST backend.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<Session>,
}

impl DashboardClient {
    /// Creates a new client for the given backend.
    ///
    /// The timeout applies to every request issued through this client;
    /// a timed-out request surfaces as a retryable fetch failure.
    pub fn new(base_url: Url, session: Arc<Session>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url,
            session,
        }
    }

    /// Returns the session this client authenticates with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetches the persisted calendar entries for one month.
    ///
    /// The query range is the month's first and last day, both inclusive.
    pub async fn month_events(&self, cursor: MonthCursor) -> ApiResult<Vec<CalendarEntry>> {
        let (start, end) = month_range(cursor);
        let url = self.endpoint("api/calendar")?;

        let request = self
            .request(Method::GET, url)
            .query(&[("start", start.as_str()), ("end", end.as_str())]);
        let response = self.execute(request).await?;

        let entries: Vec<CalendarEntry> = decode(response).await?;
        debug!(month = %cursor.label(), count = entries.len(), "fetched calendar entries");
        Ok(entries)
    }

    /// Fetches the full task list.
    pub async fn tasks(&self) -> ApiResult<Vec<TaskRecord>> {
        let url = self.endpoint("api/tasks")?;
        let response = self.execute(self.request(Method::GET, url)).await?;

        let tasks: Vec<TaskRecord> = decode(response).await?;
        debug!(count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }

    /// Creates a calendar entry.
    pub async fn create_event(&self, payload: &EventPayload) -> ApiResult<()> {
        let url = self.endpoint("api/calendar")?;
        self.execute(self.request(Method::POST, url).json(payload))
            .await?;
        debug!(date = %payload.date, "created calendar entry");
        Ok(())
    }

    /// Updates the calendar entry with the given id.
    pub async fn update_event(&self, id: i64, payload: &EventPayload) -> ApiResult<()> {
        let url = self.endpoint(&format!("api/calendar/{}", id))?;
        self.execute(self.request(Method::PUT, url).json(payload))
            .await?;
        debug!(id, "updated calendar entry");
        Ok(())
    }

    /// Deletes the calendar entry with the given id.
    pub async fn delete_event(&self, id: i64) -> ApiResult<()> {
        let url = self.endpoint(&format!("api/calendar/{}", id))?;
        self.execute(self.request(Method::DELETE, url)).await?;
        debug!(id, "deleted calendar entry");
        Ok(())
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::bad_request(format!("invalid endpoint path: {}", e)))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.http.request(method, url);
        match self.session.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::timeout("request timed out").with_source(e)
            } else if e.is_connect() {
                ApiError::network("connection failed").with_source(e)
            } else {
                ApiError::network("request failed").with_source(e)
            }
        })?;

        self.check_status(response).await
    }

    async fn check_status(&self, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = if body.is_empty() {
            status.to_string()
        } else {
            format!("{}: {}", status, body)
        };

        if status == StatusCode::UNAUTHORIZED {
            // Clear-on-401: the auth collaborator owns re-authentication.
            warn!("backend rejected credentials, clearing session");
            self.session.clear();
            return Err(ApiError::unauthorized(detail));
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(detail));
        }
        if status.is_server_error() {
            return Err(ApiError::server(detail));
        }
        Err(ApiError::bad_request(detail))
    }
}

/// Inclusive ISO start/end dates for one month's calendar query.
pub fn month_range(cursor: MonthCursor) -> (String, String) {
    (
        cursor.first_day().format("%Y-%m-%d").to_string(),
        cursor.last_day().format("%Y-%m-%d").to_string(),
    )
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::invalid_response("failed to decode response body").with_source(e))
}
