//! Equipment pools and unit records
//!
//! Three disjoint numeric pools: laptops, Brother label printers and Godex
//! label printers. A unit is identified by its pool and number alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label printer manufacturer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterKind {
    Brother,
    Godex,
}

impl PrinterKind {
    pub fn label(&self) -> &'static str {
        match self {
            PrinterKind::Brother => "Brother",
            PrinterKind::Godex => "Godex",
        }
    }
}

impl fmt::Display for PrinterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrinterKind::Brother => "brother",
            PrinterKind::Godex => "godex",
        };
        write!(f, "{s}")
    }
}

/// Equipment pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pool {
    Laptop,
    Brother,
    Godex,
}

impl Pool {
    /// Full numeric range of the pool
    pub fn numbers(&self) -> std::ops::RangeInclusive<u8> {
        match self {
            Pool::Laptop => 1..=25,
            Pool::Brother => 1..=28,
            Pool::Godex => 1..=21,
        }
    }

    pub fn size(&self) -> usize {
        self.numbers().count()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers().contains(&number)
    }
}

impl From<PrinterKind> for Pool {
    fn from(kind: PrinterKind) -> Self {
        match kind {
            PrinterKind::Brother => Pool::Brother,
            PrinterKind::Godex => Pool::Godex,
        }
    }
}

/// Laptop unit record as stored remotely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaptopUnit {
    pub id: i64,
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub mac_address: Option<String>,
    pub model: Option<String>,
    pub specification: Option<String>,
    pub status: Option<String>,
}

/// Printer unit record as stored remotely (Brother and Godex share the shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterUnit {
    pub id: i64,
    pub name: Option<String>,
    pub model: Option<String>,
    pub mac_address: Option<String>,
    pub ip_address: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<String>,
}
