//! Ledger error types

use shared::models::{Domain, PaymentMethod};
use thiserror::Error;

/// Errors surfaced by the purchase ledger core.
///
/// Everything here is recoverable at the screen boundary; callers turn
/// these into user-visible messages and nothing panics.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No session id for the required role; prompt login, issue no call
    #[error("not signed in")]
    NotAuthenticated,

    /// Catalog fetch failed; checkout cannot start
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// One of the history fetches failed; no partial view is shown
    #[error("failed to load {domain} history: {detail}")]
    AggregationFailed { domain: Domain, detail: String },

    /// Backend rejected the purchase with a message (shown verbatim)
    #[error("{0}")]
    SubmissionRejected(String),

    /// Transport failure while submitting a purchase
    #[error("purchase failed, please try again")]
    SubmissionNetworkError(#[source] reqwest::Error),

    /// Selected item is not in the current catalog snapshot
    #[error("item {0} is not in the catalog")]
    ItemNotInCatalog(i64),

    /// Payment method not offered for this domain
    #[error("{method} payment is not offered for {domain} purchases")]
    PaymentNotOffered { domain: Domain, method: PaymentMethod },

    /// Response did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
