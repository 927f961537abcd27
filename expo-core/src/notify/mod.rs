//! Notification subsystem
//!
//! Alerts are recomputed wholesale from current data on a timer and on
//! demand; only the acknowledgement set survives between runs (and across
//! restarts, in a small JSON file).

pub mod center;
pub mod derive;
pub mod read_store;

pub use center::{NotificationCenter, REFRESH_INTERVAL};
pub use read_store::{ReadMarks, ReadStoreError};
