//! Audit logging service
//!
//! Records who did what to the remote activity log. Strictly best-effort:
//! a failed write is logged locally and never propagates to the action that
//! triggered it.

use crate::store::DataStore;
use shared::models::{ActionKind, ActivityEntry, ActivityTarget, Rack};
use shared::types::UserContext;
use std::sync::Arc;

/// Best-effort activity recorder
#[derive(Clone)]
pub struct AuditLog {
    store: Arc<dyn DataStore>,
}

impl AuditLog {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    async fn record(&self, entry: ActivityEntry) {
        if let Err(error) = self.store.record_activity(&entry).await {
            tracing::error!(%error, item = %entry.item_name, "Failed to write activity record");
        }
    }

    fn entry(user: &UserContext, action: ActionKind, target: ActivityTarget, item_name: String) -> ActivityEntry {
        ActivityEntry {
            user_id: user.id.to_string(),
            username: user.display_name().to_string(),
            action_type: action,
            item_type: target,
            item_name,
            avatar_url: user.photo_url.clone(),
        }
    }

    /// One installation created
    pub async fn installation_created(&self, user: &UserContext, rack: Rack) {
        let entry = Self::entry(
            user,
            ActionKind::CreateInstallation,
            ActivityTarget::Installation,
            format!("Стойка {rack}"),
        );
        self.record(entry).await;
    }

    /// A bulk batch finished with `count` installations created
    pub async fn bulk_installations_created(&self, user: &UserContext, count: usize) {
        let entry = Self::entry(
            user,
            ActionKind::CreateInstallation,
            ActivityTarget::Installation,
            format!("Массовое создание: {count} установок"),
        );
        self.record(entry).await;
    }
}
