//! Shared types for the park purchase ledger
//!
//! Data models and wire DTOs used on the REST boundary between the
//! park backend and the ledger client.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
