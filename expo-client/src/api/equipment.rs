//! Equipment API

use crate::{ClientResult, HttpClient};
use shared::models::{LaptopUnit, PrinterKind, PrinterUnit};

impl HttpClient {
    // ========== Equipment API ==========

    /// All laptop units, by number
    pub async fn list_laptops(&self) -> ClientResult<Vec<LaptopUnit>> {
        self.get("/api/equipment/laptops").await
    }

    /// One laptop unit
    pub async fn laptop(&self, id: i64) -> ClientResult<LaptopUnit> {
        self.get(&format!("/api/equipment/laptops/{id}")).await
    }

    /// All printer units of one family, by number
    pub async fn list_printers(&self, kind: PrinterKind) -> ClientResult<Vec<PrinterUnit>> {
        self.get(&format!("/api/equipment/printers/{kind}")).await
    }

    /// One printer unit
    pub async fn printer(&self, kind: PrinterKind, id: i64) -> ClientResult<PrinterUnit> {
        self.get(&format!("/api/equipment/printers/{kind}/{id}")).await
    }
}
