//! Data models
//!
//! Shared between the ledger client and whatever renders its output.
//! Wire DTOs (camelCase JSON) live in [`crate::client`]; these are the
//! normalized shapes the core works with. All IDs are `i64`.

pub mod actor;
pub mod catalog;
pub mod payment;
pub mod transaction;

// Re-exports
pub use actor::*;
pub use catalog::*;
pub use payment::*;
pub use transaction::*;
