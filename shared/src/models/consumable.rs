//! Consumable stock models
//!
//! Label rolls and ribbons for the two printer families. The wizard and
//! notification subsystems only read these; quantities are adjusted from the
//! stock pages.

use super::equipment::PrinterKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Consumable stock row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumable {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    /// Alert threshold; absent means 0
    pub min_quantity: Option<u32>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_updated_by: Option<String>,
}

impl Consumable {
    pub fn minimum(&self) -> u32 {
        self.min_quantity.unwrap_or(0)
    }

    /// Stock at or below the configured minimum
    pub fn is_low(&self) -> bool {
        self.quantity <= self.minimum()
    }
}

/// Quantity adjustment payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConsumableAdjustment {
    #[validate(range(max = 100_000, message = "quantity out of range"))]
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}

/// Stock change history row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumableHistory {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: PrinterKind,
    pub name: String,
    /// Signed quantity delta
    pub quantity: i32,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}
