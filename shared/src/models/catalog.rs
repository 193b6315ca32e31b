//! Catalog Model

use serde::{Deserialize, Serialize};

/// One purchasable entry in a domain catalog.
///
/// Immutable snapshot fetched fresh per checkout session; the unit
/// price recorded here is the only price a purchase may be submitted
/// with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub item_id: i64,
    pub display_name: String,
    pub unit_price: f64,
}
