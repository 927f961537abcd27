//! Wizard submission
//!
//! Single mode issues exactly one create call and keeps the session alive on
//! failure so the user can retry. Bulk mode issues one create call per
//! configuration, strictly in configuration order, each catching its own
//! failure; the batch never rolls back and the session is cleared afterwards
//! whatever the outcome.

use super::session::{WizardError, WizardSession};
use crate::audit::AuditLog;
use crate::bus::{RefreshBus, RefreshEvent};
use crate::store::DataStore;
use expo_client::ClientError;
use shared::models::{Installation, Rack};
use shared::types::UserContext;
use std::sync::Arc;

/// One failed entry of a bulk batch
#[derive(Debug)]
pub struct BulkFailure {
    pub rack: Rack,
    pub error: ClientError,
}

/// Outcome of a bulk batch: per-entry accounting, no short-circuiting
#[derive(Debug, Default)]
pub struct BulkReport {
    pub created: Vec<Installation>,
    pub failures: Vec<BulkFailure>,
}

impl BulkReport {
    pub fn success_count(&self) -> usize {
        self.created.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn all_failed(&self) -> bool {
        self.created.is_empty() && !self.failures.is_empty()
    }
}

/// Issues wizard create calls against the store, with audit and refresh
/// side effects
#[derive(Clone)]
pub struct Submitter {
    store: Arc<dyn DataStore>,
    audit: AuditLog,
    bus: RefreshBus,
}

impl Submitter {
    pub fn new(store: Arc<dyn DataStore>, audit: AuditLog, bus: RefreshBus) -> Self {
        Self { store, audit, bus }
    }

    /// Submit the single-mode record.
    ///
    /// On failure the session is left untouched for a retry; on success the
    /// installation is audited (best-effort), a refresh is broadcast, and
    /// the session is cleared.
    pub async fn submit_single(
        &self,
        session: &mut WizardSession,
        user: &UserContext,
    ) -> Result<Installation, WizardError> {
        let draft = session.single_draft()?;
        let created = self.store.create_installation(&draft).await?;
        tracing::info!(rack = %draft.rack, equipment = %draft.equipment_summary(), "Installation created");

        self.audit.installation_created(user, draft.rack).await;
        self.bus.publish(RefreshEvent::Installations);
        session.reset();
        Ok(created)
    }

    /// Submit every bulk configuration, sequentially and independently.
    ///
    /// Refused up front (session intact) when any rack lacks a laptop.
    /// Otherwise each entry's failure is tallied without stopping the rest,
    /// and the session is cleared afterwards even if every entry failed.
    pub async fn submit_bulk(
        &self,
        session: &mut WizardSession,
        user: &UserContext,
    ) -> Result<BulkReport, WizardError> {
        let drafts = session.bulk_drafts()?;

        let mut report = BulkReport::default();
        for draft in &drafts {
            match self.store.create_installation(draft).await {
                Ok(created) => report.created.push(created),
                Err(error) => {
                    tracing::error!(rack = %draft.rack, %error, "Bulk entry failed");
                    report.failures.push(BulkFailure {
                        rack: draft.rack,
                        error,
                    });
                }
            }
        }
        tracing::info!(
            created = report.success_count(),
            failed = report.failure_count(),
            "Bulk batch finished"
        );

        self.audit
            .bulk_installations_created(user, report.success_count())
            .await;
        self.bus.publish(RefreshEvent::Installations);
        session.reset();
        Ok(report)
    }
}
