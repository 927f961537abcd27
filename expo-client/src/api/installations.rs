//! Installations API

use crate::{ClientResult, HttpClient};
use shared::models::{Installation, InstallationDraft, InstallationUpdate, Zone};

impl HttpClient {
    // ========== Installations API ==========

    /// All active installations, newest first
    pub async fn list_installations(&self) -> ClientResult<Vec<Installation>> {
        self.get("/api/installations").await
    }

    /// Active installations of one zone
    pub async fn list_installations_by_zone(&self, zone: Zone) -> ClientResult<Vec<Installation>> {
        self.get(&format!("/api/installations?zone={zone}")).await
    }

    /// Latest installation on a rack, if any
    pub async fn installation_by_rack(&self, rack: &str) -> ClientResult<Option<Installation>> {
        let results: Vec<Installation> = self.get(&format!("/api/installations?rack={rack}")).await?;
        Ok(results.into_iter().next())
    }

    /// Create an installation; the store assigns the id and timestamp
    pub async fn create_installation(&self, draft: &InstallationDraft) -> ClientResult<Installation> {
        tracing::debug!(rack = %draft.rack, laptop = draft.laptop, "Creating installation");
        self.post("/api/installations", draft).await
    }

    /// Partially update an installation
    pub async fn update_installation(
        &self,
        id: i64,
        update: &InstallationUpdate,
    ) -> ClientResult<Installation> {
        self.patch(&format!("/api/installations/{id}"), update).await
    }

    /// Complete an installation: the record leaves the active collection
    /// entirely (the store archives it)
    pub async fn complete_installation(&self, id: i64) -> ClientResult<()> {
        tracing::debug!(id, "Completing installation");
        self.delete(&format!("/api/installations/{id}")).await
    }

    /// Past installations of one laptop, newest first
    pub async fn laptop_history(&self, laptop: u8) -> ClientResult<Vec<Installation>> {
        self.get(&format!("/api/installations?laptop={laptop}")).await
    }

    /// Archived (completed) installations
    pub async fn list_archived_installations(&self) -> ClientResult<Vec<Installation>> {
        self.get("/api/installations/archive").await
    }
}
