//! In-memory store fake and test helpers

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use expo_client::{ClientError, ClientResult};
use expo_core::store::DataStore;
use parking_lot::Mutex;
use shared::models::{
    Activity, ActivityEntry, Consumable, Event, Installation, InstallationDraft, PrinterKind,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// In-memory `DataStore` with switchable failure injection
#[derive(Default)]
pub struct MemoryStore {
    pub installations: Mutex<Vec<Installation>>,
    pub events: Mutex<Vec<Event>>,
    pub brother: Mutex<Vec<Consumable>>,
    pub godex: Mutex<Vec<Consumable>>,
    pub activities: Mutex<Vec<Activity>>,
    /// Racks whose create call is made to fail
    pub failing_racks: Mutex<HashSet<String>>,
    /// Consumable fetches fail when set
    pub fail_consumables: Mutex<bool>,
    /// Activity writes fail when set
    pub fail_activity: Mutex<bool>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn fail_rack(&self, rack: &str) {
        self.failing_racks.lock().insert(rack.to_string());
    }

    pub fn installation_count(&self) -> usize {
        self.installations.lock().len()
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn installations(&self) -> ClientResult<Vec<Installation>> {
        Ok(self.installations.lock().clone())
    }

    async fn create_installation(&self, draft: &InstallationDraft) -> ClientResult<Installation> {
        if self.failing_racks.lock().contains(&draft.rack.to_string()) {
            return Err(ClientError::Internal(format!(
                "simulated failure for {}",
                draft.rack
            )));
        }
        let installation = Installation {
            id: self.next_id(),
            rack: draft.rack,
            laptop: draft.laptop,
            printer_type: draft.printer_type,
            printer_number: draft.printer_number,
            second_printer_type: draft.second_printer_type,
            second_printer_number: draft.second_printer_number,
            event_id: draft.event_id,
            user_id: draft.user_id.clone(),
            username: draft.username.clone(),
            date: Some(Utc::now()),
        };
        self.installations.lock().push(installation.clone());
        Ok(installation)
    }

    async fn events(&self) -> ClientResult<Vec<Event>> {
        Ok(self.events.lock().clone())
    }

    async fn complete_event(&self, id: i64) -> ClientResult<Event> {
        let mut events = self.events.lock();
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("event {id}")))?;
        event.status = shared::models::EventStatus::Completed;
        Ok(event.clone())
    }

    async fn consumables(&self, kind: PrinterKind) -> ClientResult<Vec<Consumable>> {
        if *self.fail_consumables.lock() {
            return Err(ClientError::Internal("consumables unavailable".to_string()));
        }
        let list = match kind {
            PrinterKind::Brother => self.brother.lock(),
            PrinterKind::Godex => self.godex.lock(),
        };
        Ok(list.clone())
    }

    async fn record_activity(&self, entry: &ActivityEntry) -> ClientResult<Activity> {
        if *self.fail_activity.lock() {
            return Err(ClientError::Internal("activity log unavailable".to_string()));
        }
        let activity = Activity {
            id: self.next_id(),
            user_id: entry.user_id.clone(),
            username: entry.username.clone(),
            action_type: entry.action_type,
            item_type: entry.item_type,
            item_name: entry.item_name.clone(),
            avatar_url: entry.avatar_url.clone(),
            created_at: Utc::now(),
        };
        self.activities.lock().push(activity.clone());
        Ok(activity)
    }
}

pub fn user() -> shared::types::UserContext {
    shared::types::UserContext {
        id: 4242,
        username: Some("operator".to_string()),
        first_name: None,
        photo_url: None,
    }
}

pub fn consumable(id: i64, name: &str, quantity: u32, min: u32) -> Consumable {
    Consumable {
        id,
        name: name.to_string(),
        quantity,
        min_quantity: Some(min),
        updated_at: None,
        last_updated_by: None,
    }
}
