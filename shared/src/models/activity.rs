//! Activity log models
//!
//! Best-effort audit trail of user actions. Writing an activity record must
//! never fail the action that triggered it; that contract lives with the
//! callers.

use crate::util;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recorded action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    CreateInstallation,
    CompleteInstallation,
    CreateEvent,
    CompleteEvent,
    DeleteEvent,
    UpdateConsumable,
}

impl ActionKind {
    /// Past-tense label for the activity feed
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::CreateInstallation => "создал установку",
            ActionKind::CompleteInstallation => "завершил установку",
            ActionKind::CreateEvent => "создал мероприятие",
            ActionKind::CompleteEvent => "завершил мероприятие",
            ActionKind::DeleteEvent => "удалил мероприятие",
            ActionKind::UpdateConsumable => "обновил расходник",
        }
    }
}

/// Target kind of a recorded action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTarget {
    Installation,
    Event,
    Consumable,
}

/// Activity record as stored remotely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub user_id: String,
    pub username: String,
    pub action_type: ActionKind,
    pub item_type: ActivityTarget,
    pub item_name: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create activity payload; the server assigns `id` and `created_at`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub user_id: String,
    pub username: String,
    pub action_type: ActionKind,
    pub item_type: ActivityTarget,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Display-ready activity row for the recent feed
#[derive(Debug, Clone, Serialize)]
pub struct ActivityDisplay {
    pub id: i64,
    pub user: String,
    pub user_id: String,
    pub avatar_url: Option<String>,
    pub action: &'static str,
    pub item: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

impl From<Activity> for ActivityDisplay {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            user: activity.username,
            user_id: activity.user_id,
            avatar_url: activity.avatar_url,
            action: activity.action_type.label(),
            item: activity.item_name,
            time: util::format_day_month_year_time(activity.created_at),
            created_at: activity.created_at,
        }
    }
}
