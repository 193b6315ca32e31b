//! Ledger Client - unified purchase ledger for the park backend
//!
//! Drives the generic "select item, choose payment, submit, confirm"
//! checkout across the three sale domains (tickets, merchandise,
//! dining), and aggregates the three domains' transaction histories
//! into one role-gated, chronologically ordered view.
//!
//! The backend itself (persistence, sessions) is a collaborator: this
//! crate only consumes its REST surface. The acting identity is always
//! passed in as an [`Actor`], never read from ambient state.

pub mod checkout;
pub mod config;
pub mod domain;
pub mod error;
pub mod history;
pub mod money;
pub mod scope;

mod http;

pub use checkout::{Browsing, Checkout, ItemSelected, PurchaseIntent, Submission};
pub use config::ClientConfig;
pub use domain::{Commodity, Confirmation, Dining, SaleDomain, Ticket};
pub use error::{LedgerError, LedgerResult};
pub use history::{HistoryOutcome, HistoryView, load_history};
pub use http::ApiClient;
pub use scope::Scope;

// Re-export shared types for convenience
pub use shared::models::{Actor, CatalogItem, Domain, PaymentMethod, Role, Transaction};
