//! Notification center
//!
//! Owns the current alert list and the acknowledgement set, refetches the
//! three snapshots and rederives on demand and on a fixed timer. There is no
//! push from the store; this is polling.

use super::derive::derive_notifications;
use super::read_store::ReadMarks;
use crate::store::DataStore;
use chrono::Utc;
use shared::models::{Notification, PrinterKind};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How often the alert list is recomputed
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Derives and holds the current alert list
pub struct NotificationCenter {
    store: Arc<dyn DataStore>,
    marks: Mutex<ReadMarks>,
    current: RwLock<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new(store: Arc<dyn DataStore>, marks: ReadMarks) -> Self {
        Self {
            store,
            marks: Mutex::new(marks),
            current: RwLock::new(Vec::new()),
        }
    }

    /// Refetch the three snapshots and rebuild the alert list.
    ///
    /// Each source is isolated: a failing fetch is logged and contributes an
    /// empty snapshot, the other rules still run.
    pub async fn refresh(&self) {
        let now = Utc::now();

        let brother = self
            .store
            .consumables(PrinterKind::Brother)
            .await
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "Brother consumables unavailable for alerts");
                Vec::new()
            });
        let godex = self
            .store
            .consumables(PrinterKind::Godex)
            .await
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "Godex consumables unavailable for alerts");
                Vec::new()
            });
        let events = self.store.events().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "Events unavailable for alerts");
            Vec::new()
        });
        let installations = self.store.installations().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "Installations unavailable for alerts");
            Vec::new()
        });

        let read = {
            let marks = self.marks.lock();
            marks.ids().clone()
        };
        let notifications =
            derive_notifications(&brother, &godex, &events, &installations, &read, now);
        tracing::debug!(count = notifications.len(), "Notifications recomputed");

        *self.current.write() = notifications;
    }

    /// Current alert list, newest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.current.read().clone()
    }

    pub fn unread_count(&self) -> usize {
        self.current.read().iter().filter(|n| !n.read).count()
    }

    /// Acknowledge one identifier. The persisted set is updated first; a
    /// failed write keeps the in-memory acknowledgement so the UI stays
    /// consistent until restart.
    pub fn mark_as_read(&self, id: &str) {
        {
            let mut marks = self.marks.lock();
            if let Err(error) = marks.mark(id) {
                tracing::error!(%error, id, "Failed to persist read mark");
            }
        }
        let mut current = self.current.write();
        for notification in current.iter_mut() {
            if notification.id == id {
                notification.read = true;
            }
        }
    }

    /// Acknowledge every identifier currently in the list
    pub fn mark_all_as_read(&self) {
        let ids: Vec<String> = {
            let current = self.current.read();
            current.iter().map(|n| n.id.clone()).collect()
        };
        {
            let mut marks = self.marks.lock();
            if let Err(error) = marks.mark_all(ids) {
                tracing::error!(%error, "Failed to persist read marks");
            }
        }
        let mut current = self.current.write();
        for notification in current.iter_mut() {
            notification.read = true;
        }
    }

    /// Start the polling loop: one refresh immediately, then one per
    /// interval until the token is cancelled
    pub fn spawn_polling(
        self: &Arc<Self>,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        let center = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        tracing::debug!("Notification polling stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        center.refresh().await;
                    }
                }
            }
        })
    }
}
