//! Installation model
//!
//! A committed association between one rack, one laptop and up to two label
//! printers, optionally tied to an event. Completing an installation removes
//! it from the active collection entirely (archive semantics).

use super::equipment::PrinterKind;
use super::zone::Rack;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Installation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installation {
    pub id: i64,
    pub rack: Rack,
    pub laptop: u8,
    pub printer_type: Option<PrinterKind>,
    pub printer_number: Option<u8>,
    pub second_printer_type: Option<PrinterKind>,
    pub second_printer_number: Option<u8>,
    pub event_id: Option<i64>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Create installation payload; the server assigns `id` and `date`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationDraft {
    pub rack: Rack,
    pub laptop: u8,
    pub printer_type: Option<PrinterKind>,
    pub printer_number: Option<u8>,
    pub second_printer_type: Option<PrinterKind>,
    pub second_printer_number: Option<u8>,
    pub event_id: Option<i64>,
    pub user_id: Option<String>,
    pub username: Option<String>,
}

/// Partial update payload; only named fields are touched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laptop: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer_type: Option<Option<PrinterKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer_number: Option<Option<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_printer_type: Option<Option<PrinterKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_printer_number: Option<Option<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<Option<i64>>,
}

impl InstallationDraft {
    /// Short human description of the assigned equipment,
    /// e.g. "Ноутбук #3, Brother #5"
    pub fn equipment_summary(&self) -> String {
        let mut desc = format!("Ноутбук #{}", self.laptop);
        if let (Some(kind), Some(number)) = (self.printer_type, self.printer_number) {
            desc.push_str(&format!(", {} #{}", kind.label(), number));
        }
        if let (Some(kind), Some(number)) = (self.second_printer_type, self.second_printer_number) {
            desc.push_str(&format!(", {} #{}", kind.label(), number));
        }
        desc
    }
}
