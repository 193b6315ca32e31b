//! Wire DTOs for the park backend REST API
//!
//! Request/response types as the backend emits them (camelCase JSON).
//! The three sale domains drifted apart on field names over time, so
//! each domain gets its own raw shapes here; the ledger client folds
//! them into the normalized models.
//!
//! Sale rows are deliberately tolerant: every descriptive field is
//! optional so a sparse backend row deserializes instead of erroring.

use serde::{Deserialize, Serialize};

// =============================================================================
// Ticket API DTOs
// =============================================================================

/// Catalog row from `GET /ticket/types`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub ticket_type_id: i64,
    pub type_name: String,
    pub price: f64,
}

/// Body for `POST /ticket/purchase`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPurchaseRequest {
    pub customer_id: i64,
    pub ticket_type_id: i64,
    pub total_price: f64,
    pub payment_method: String,
}

/// Success body from `POST /ticket/purchase`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPurchaseReceipt {
    pub message: String,
    pub ticket_id: i64,
}

/// Sale row from `GET /ticket/sales` or `GET /ticket/customer/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSale {
    pub ticket_id: i64,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

// =============================================================================
// Commodity API DTOs
// =============================================================================

/// Catalog row from `GET /commodity/types`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityType {
    pub commodity_type_id: i64,
    pub commodity_name: String,
    pub price: f64,
}

/// Body for `POST /commodity/purchase`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityPurchaseRequest {
    pub customer_id: i64,
    pub commodity_type_id: i64,
    pub total_price: f64,
    pub payment_method: String,
}

/// Success body from `POST /commodity/purchase`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityPurchaseReceipt {
    pub message: String,
    pub commodity_id: i64,
}

/// Sale row from `GET /commodity/sales` or `GET /commodity/customer/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommoditySale {
    pub commodity_id: i64,
    #[serde(default)]
    pub commodity_name: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

// =============================================================================
// Dining API DTOs
// =============================================================================

/// Catalog row from `GET /restaurant/menu`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub dish_id: i64,
    pub dish_name: String,
    pub price: f64,
}

/// Body for `POST /restaurant/order`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningOrderRequest {
    pub customer_id: i64,
    pub dish_id: i64,
    pub total_price: f64,
    pub payment_method: String,
}

/// Success body from `POST /restaurant/order`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningOrderReceipt {
    pub message: String,
    pub order_id: i64,
}

/// Order row from `GET /restaurant/orders` or
/// `GET /restaurant/customer/{id}/orders`
///
/// The dining service emits either `total` or the shared `price`
/// field, and either `orderDate` or the shared `purchaseDate`; the
/// domain-specific field wins when both appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningOrder {
    pub order_id: i64,
    #[serde(default)]
    pub dish_name: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

// =============================================================================
// Common DTOs
// =============================================================================

/// Error body the backend sends on a non-2xx purchase response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionBody {
    #[serde(default)]
    pub message: Option<String>,
}
