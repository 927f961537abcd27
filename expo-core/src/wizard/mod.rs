//! Allocation wizard
//!
//! Walks the user from mode selection to one or more committed installation
//! records. Single mode assigns one rack; bulk mode configures several racks
//! in a row, with a collision rule that keeps every laptop and printer
//! number unique across the batch and against everything already committed.

pub mod availability;
pub mod pagination;
pub mod session;
pub mod submit;

pub use availability::{Occupancy, SlotOption};
pub use session::{
    PrinterField, PrinterSlot, RackConfig, WizardAdvance, WizardError, WizardMode, WizardSession,
    WizardStep,
};
pub use submit::{BulkFailure, BulkReport, Submitter};
