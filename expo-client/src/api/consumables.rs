//! Consumables API

use crate::{ClientResult, HttpClient};
use chrono::Utc;
use shared::models::{Consumable, ConsumableAdjustment, ConsumableHistory, PrinterKind};
use validator::Validate;

impl HttpClient {
    // ========== Consumables API ==========

    /// All consumables of one printer family, by name
    pub async fn list_consumables(&self, kind: PrinterKind) -> ClientResult<Vec<Consumable>> {
        self.get(&format!("/api/consumables/{kind}")).await
    }

    /// Set a consumable's quantity, stamping the actor and time when given
    pub async fn update_consumable(
        &self,
        kind: PrinterKind,
        id: i64,
        quantity: u32,
        updated_by: Option<&str>,
    ) -> ClientResult<Consumable> {
        let adjustment = ConsumableAdjustment {
            quantity,
            updated_at: updated_by.map(|_| Utc::now()),
            last_updated_by: updated_by.map(str::to_string),
        };
        adjustment.validate()?;
        tracing::debug!(%kind, id, quantity, "Updating consumable stock");
        self.patch(&format!("/api/consumables/{kind}/{id}"), &adjustment).await
    }

    /// Stock change history, newest first; `kind` narrows to one family
    pub async fn consumable_history(
        &self,
        kind: Option<PrinterKind>,
    ) -> ClientResult<Vec<ConsumableHistory>> {
        match kind {
            Some(kind) => self.get(&format!("/api/consumables/history?type={kind}")).await,
            None => self.get("/api/consumables/history").await,
        }
    }
}
