//! Event listing with auto-completion
//!
//! Events whose end date has passed are completed on sight, one best-effort
//! update per event; a failed update leaves the event as fetched.

use crate::store::DataStore;
use chrono::{DateTime, Utc};
use expo_client::ClientResult;
use shared::models::{Event, EventStatus};

/// List current events, completing the ones already past their end date.
/// Date comparison is day-granular: an event ending today stays active.
pub async fn load_events(store: &dyn DataStore, now: DateTime<Utc>) -> ClientResult<Vec<Event>> {
    let mut events = store.events().await?;

    for event in &mut events {
        let Some(end) = event.end_date else { continue };
        if event.status == EventStatus::Completed || end.date_naive() >= now.date_naive() {
            continue;
        }
        match store.complete_event(event.id).await {
            Ok(_) => {
                tracing::info!(id = event.id, name = %event.name, "Auto-completed past event");
                event.status = EventStatus::Completed;
            }
            Err(error) => {
                tracing::warn!(id = event.id, %error, "Failed to auto-complete past event");
            }
        }
    }

    Ok(events)
}
