//! Common types
//!
//! The host runtime (the Telegram container) provides user identity; the
//! core only carries it along into audit records.

use serde::{Deserialize, Serialize};

/// User identity supplied by the host runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub photo_url: Option<String>,
}

impl UserContext {
    /// Username, falling back to first name, then "Unknown"
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.first_name.as_deref())
            .unwrap_or("Unknown")
    }
}
