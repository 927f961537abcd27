//! Remote store seam
//!
//! The wizard and the notification deriver only ever touch the remote store
//! through this trait, so tests run them against in-memory fakes and the
//! application wires in the HTTP client.

use async_trait::async_trait;
use expo_client::{ClientResult, HttpClient};
use shared::models::{
    Activity, ActivityEntry, Consumable, Event, Installation, InstallationDraft, PrinterKind,
};

/// Read and create operations the core consumes
#[async_trait]
pub trait DataStore: Send + Sync {
    /// All active installations
    async fn installations(&self) -> ClientResult<Vec<Installation>>;

    /// Create an installation; returns the stored record with its id
    async fn create_installation(&self, draft: &InstallationDraft) -> ClientResult<Installation>;

    /// All current events
    async fn events(&self) -> ClientResult<Vec<Event>>;

    /// Mark an event completed
    async fn complete_event(&self, id: i64) -> ClientResult<Event>;

    /// Consumable stock of one printer family
    async fn consumables(&self, kind: PrinterKind) -> ClientResult<Vec<Consumable>>;

    /// Append an activity record
    async fn record_activity(&self, entry: &ActivityEntry) -> ClientResult<Activity>;
}

#[async_trait]
impl DataStore for HttpClient {
    async fn installations(&self) -> ClientResult<Vec<Installation>> {
        self.list_installations().await
    }

    async fn create_installation(&self, draft: &InstallationDraft) -> ClientResult<Installation> {
        HttpClient::create_installation(self, draft).await
    }

    async fn events(&self) -> ClientResult<Vec<Event>> {
        self.list_events().await
    }

    async fn complete_event(&self, id: i64) -> ClientResult<Event> {
        HttpClient::complete_event(self, id).await
    }

    async fn consumables(&self, kind: PrinterKind) -> ClientResult<Vec<Consumable>> {
        self.list_consumables(kind).await
    }

    async fn record_activity(&self, entry: &ActivityEntry) -> ClientResult<Activity> {
        self.create_activity(entry).await
    }
}
