//! Activity log API

use crate::{ClientResult, HttpClient};
use shared::models::{Activity, ActivityDisplay, ActivityEntry};

impl HttpClient {
    // ========== Activity API ==========

    /// Recent activity, display-ready, newest first
    pub async fn recent_activity(&self, limit: usize) -> ClientResult<Vec<ActivityDisplay>> {
        let activities: Vec<Activity> = self.get(&format!("/api/activity?limit={limit}")).await?;
        Ok(activities.into_iter().map(ActivityDisplay::from).collect())
    }

    /// Record an activity entry.
    ///
    /// Callers treat this as best-effort: a failed write is logged and must
    /// never abort the action being recorded.
    pub async fn create_activity(&self, entry: &ActivityEntry) -> ClientResult<Activity> {
        self.post("/api/activity", entry).await
    }
}
