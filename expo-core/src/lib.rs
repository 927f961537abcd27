//! Application core for the expo equipment tracker
//!
//! Two subsystems with real behavior live here: the allocation wizard (a
//! multi-step flow assigning laptops and label printers to racks without
//! collisions) and the notification deriver (ephemeral alerts computed from
//! stock, events and installations, with persisted read state). Around them:
//! the `DataStore` seam over the remote store, a refresh broadcast bus, and
//! a best-effort audit logger.

pub mod audit;
pub mod bus;
pub mod events;
pub mod notify;
pub mod pools;
pub mod store;
pub mod wizard;

// Re-exports
pub use audit::AuditLog;
pub use bus::{RefreshBus, RefreshEvent};
pub use notify::{NotificationCenter, ReadMarks};
pub use store::DataStore;
pub use wizard::{Occupancy, Submitter, WizardSession};
