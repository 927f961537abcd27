//! Persisted acknowledgement set
//!
//! A small JSON file mapping notification identifiers to "seen". Loaded at
//! startup, written on every acknowledgement, independent of the derivation
//! cycle; derivation stays a pure function of the set.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Acknowledged notification identifiers, backed by
/// `{data_dir}/notifications/read.json`
#[derive(Debug)]
pub struct ReadMarks {
    file_path: PathBuf,
    ids: HashSet<String>,
}

impl ReadMarks {
    /// Load the set from the data directory; a missing file is an empty set
    pub fn load(data_dir: &Path) -> Result<Self, ReadStoreError> {
        let file_path = data_dir.join("notifications/read.json");

        let ids = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content)?
        } else {
            HashSet::new()
        };

        Ok(Self { file_path, ids })
    }

    fn save(&self) -> Result<(), ReadStoreError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.ids)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(count = self.ids.len(), "Read marks saved");
        Ok(())
    }

    /// Acknowledge one identifier
    pub fn mark(&mut self, id: &str) -> Result<(), ReadStoreError> {
        if self.ids.insert(id.to_string()) {
            self.save()?;
        }
        Ok(())
    }

    /// Acknowledge many identifiers at once
    pub fn mark_all<I, S>(&mut self, ids: I) -> Result<(), ReadStoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut changed = false;
        for id in ids {
            changed |= self.ids.insert(id.into());
        }
        if changed {
            self.save()?;
        }
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }
}
