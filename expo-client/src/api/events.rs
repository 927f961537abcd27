//! Events API

use crate::{ClientResult, HttpClient};
use shared::models::{Event, EventCreate, EventUpdate};
use validator::Validate;

impl HttpClient {
    // ========== Events API ==========

    /// All current events, newest start date first
    pub async fn list_events(&self) -> ClientResult<Vec<Event>> {
        self.get("/api/events").await
    }

    /// Events overlapping one calendar month
    pub async fn list_events_by_month(&self, year: i32, month: u32) -> ClientResult<Vec<Event>> {
        self.get(&format!("/api/events?year={year}&month={month}")).await
    }

    /// One event, if it exists
    pub async fn event(&self, id: i64) -> ClientResult<Option<Event>> {
        let results: Vec<Event> = self.get(&format!("/api/events?id={id}")).await?;
        Ok(results.into_iter().next())
    }

    /// Create an event; the payload is validated before any network call
    pub async fn create_event(&self, payload: &EventCreate) -> ClientResult<Event> {
        payload.validate()?;
        tracing::debug!(name = %payload.name, "Creating event");
        self.post("/api/events", payload).await
    }

    /// Partially update an event
    pub async fn update_event(&self, id: i64, update: &EventUpdate) -> ClientResult<Event> {
        self.patch(&format!("/api/events/{id}"), update).await
    }

    /// Mark an event completed
    pub async fn complete_event(&self, id: i64) -> ClientResult<Event> {
        use shared::models::EventStatus;
        let update = EventUpdate {
            status: Some(EventStatus::Completed),
            ..Default::default()
        };
        self.patch(&format!("/api/events/{id}"), &update).await
    }

    /// Delete an event outright
    pub async fn delete_event(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/events/{id}")).await
    }

    /// Archived (past) events
    pub async fn list_archived_events(&self) -> ClientResult<Vec<Event>> {
        self.get("/api/events/archive").await
    }
}
