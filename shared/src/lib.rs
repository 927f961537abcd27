//! Shared types for the expo equipment tracker
//!
//! Common types used across the client and core crates: domain models,
//! API response envelope, user identity, and display formatting helpers.

pub mod models;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
pub use types::UserContext;
