//! Notification model
//!
//! Alerts are derived wholesale from current data; nothing is stored
//! remotely. Identifiers are pure functions of the triggering entity's
//! stable key so that read/unread state survives recomputation.

use super::equipment::PrinterKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed identifier for the aggregate long-running-installations alert
pub const LONG_ACTIVE_INSTALLATIONS_ID: &str = "long_active_installations";

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
    Info,
    Success,
}

/// Derived alert record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Formatted time shown next to the alert
    pub display_time: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Identifier for a low-stock alert: `low_stock_<kind>_<consumable id>`
pub fn low_stock_id(kind: PrinterKind, consumable_id: i64) -> String {
    format!("low_stock_{kind}_{consumable_id}")
}

/// Identifier for an imminent-event alert: `event_soon_<event id>`
pub fn event_soon_id(event_id: i64) -> String {
    format!("event_soon_{event_id}")
}
