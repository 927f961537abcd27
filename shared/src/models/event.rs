//! Event model

use super::zone::Zone;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Active,
    Completed,
}

/// Event entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub status: EventStatus,
    /// Zones the event occupies; empty means the whole floor
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl Event {
    /// Whether installations may still be attached to this event
    pub fn accepts_installations(&self) -> bool {
        matches!(self.status, EventStatus::Active | EventStatus::Upcoming)
    }
}

/// Create event payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventCreate {
    #[validate(length(min = 1, message = "event name must not be empty"))]
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    pub description: Option<String>,
    pub status: EventStatus,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<Zone>>,
}
