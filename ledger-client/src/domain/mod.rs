//! Sale domain adapters
//!
//! One shared contract ([`SaleDomain`]) with three small adapters, one
//! per sale category. Each adapter knows its backend paths, its raw
//! wire shapes, which payment methods its counters accept, and how to
//! fold a raw sale row into the normalized [`Transaction`] shape.
//!
//! Normalization is total: a raw row with any permutation of missing
//! optional fields still produces a transaction (price defaults to 0,
//! labels are synthesized, bad timestamps become `None`).

mod commodity;
mod dining;
mod ticket;

pub use commodity::Commodity;
pub use dining::Dining;
pub use ticket::Ticket;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{CatalogItem, Domain, PaymentMethod, Transaction};

/// Outcome of a confirmed purchase.
#[derive(Debug, Clone)]
pub struct Confirmation {
    /// User-facing confirmation text, includes the backend-issued
    /// transaction id as `#<id>`.
    pub message: String,
    /// Backend-issued id of the recorded sale.
    pub transaction_id: i64,
}

impl Confirmation {
    pub(crate) fn new(message: &str, transaction_id: i64) -> Self {
        Self {
            message: format!("{} (#{})", message, transaction_id),
            transaction_id,
        }
    }
}

/// Contract every sale domain adapter implements.
///
/// Adapters are zero-sized; everything is associated types, constants,
/// and pure functions.
pub trait SaleDomain: Sized + Send + Sync + 'static {
    /// Which sale category this adapter serves.
    const DOMAIN: Domain;

    /// Catalog row as the backend emits it.
    type CatalogRow: DeserializeOwned + Send;
    /// Purchase request body.
    type PurchaseRequest: Serialize + Send + Sync;
    /// Success body of a purchase.
    type Receipt: DeserializeOwned + Send;
    /// Raw sale/order row from the history endpoints.
    type SaleRow: DeserializeOwned + Send;

    /// Path of the catalog listing, relative to the base URL.
    fn catalog_path() -> &'static str;

    /// Path purchases are POSTed to.
    fn purchase_path() -> &'static str;

    /// Payment methods offered at this domain's counters.
    fn payment_methods() -> &'static [PaymentMethod];

    /// Fold a catalog row into the normalized snapshot entry.
    fn catalog_item(row: Self::CatalogRow) -> CatalogItem;

    /// Build the purchase body. `total_price` always comes from the
    /// catalog snapshot, never from user input.
    fn purchase_request(
        customer_id: i64,
        item_id: i64,
        total_price: f64,
        method: PaymentMethod,
    ) -> Self::PurchaseRequest;

    /// Fold the success body into a confirmation.
    fn receipt(receipt: Self::Receipt) -> Confirmation;

    /// Fold a raw sale row into the common transaction shape. Total;
    /// never errors.
    fn normalize(row: Self::SaleRow) -> Transaction;

    /// Whether a payment method is offered for this domain.
    fn offers(method: PaymentMethod) -> bool {
        Self::payment_methods().contains(&method)
    }
}

/// Parse a backend timestamp leniently.
///
/// Accepts RFC 3339, `%Y-%m-%dT%H:%M:%S`, `%Y-%m-%d %H:%M:%S`, and a
/// bare date. Anything else is `None`, which sorts after all dated
/// transactions in the aggregated view.
pub(crate) fn parse_occurred_at(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    if let Ok(nd) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&nd.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Clamp a raw price to the `price >= 0` invariant, defaulting
/// missing values to zero.
pub(crate) fn sanitize_price(raw: Option<f64>) -> f64 {
    match raw {
        Some(p) if p.is_finite() && p >= 0.0 => p,
        Some(p) => {
            tracing::warn!(price = p, "discarding invalid price on sale row");
            0.0
        }
        None => 0.0,
    }
}

/// Payment method string for a normalized row.
pub(crate) fn sanitize_payment(raw: Option<String>) -> String {
    raw.unwrap_or_else(|| "unknown".to_string())
}
