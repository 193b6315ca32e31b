//! Commodity (merchandise) domain adapter

use super::{Confirmation, SaleDomain, parse_occurred_at, sanitize_payment, sanitize_price};
use shared::client::{
    CommodityPurchaseReceipt, CommodityPurchaseRequest, CommoditySale, CommodityType,
};
use shared::models::{CatalogItem, Domain, PaymentMethod, Transaction};

/// Gift-shop merchandise. Mobile payment is not taken at the
/// merchandise counters.
#[derive(Debug, Clone, Copy)]
pub struct Commodity;

impl SaleDomain for Commodity {
    const DOMAIN: Domain = Domain::Commodity;

    type CatalogRow = CommodityType;
    type PurchaseRequest = CommodityPurchaseRequest;
    type Receipt = CommodityPurchaseReceipt;
    type SaleRow = CommoditySale;

    fn catalog_path() -> &'static str {
        "commodity/types"
    }

    fn purchase_path() -> &'static str {
        "commodity/purchase"
    }

    fn payment_methods() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::Credit,
            PaymentMethod::Debit,
            PaymentMethod::Cash,
        ]
    }

    fn catalog_item(row: Self::CatalogRow) -> CatalogItem {
        CatalogItem {
            item_id: row.commodity_type_id,
            display_name: row.commodity_name,
            unit_price: row.price,
        }
    }

    fn purchase_request(
        customer_id: i64,
        item_id: i64,
        total_price: f64,
        method: PaymentMethod,
    ) -> Self::PurchaseRequest {
        CommodityPurchaseRequest {
            customer_id,
            commodity_type_id: item_id,
            total_price,
            payment_method: method.as_str().to_string(),
        }
    }

    fn receipt(receipt: Self::Receipt) -> Confirmation {
        Confirmation::new(&receipt.message, receipt.commodity_id)
    }

    fn normalize(row: Self::SaleRow) -> Transaction {
        Transaction {
            id: row.commodity_id,
            domain: Domain::Commodity,
            label: row
                .commodity_name
                .unwrap_or_else(|| format!("Order #{}", row.commodity_id)),
            price: sanitize_price(row.total_price),
            payment_method: sanitize_payment(row.payment_method),
            occurred_at: parse_occurred_at(row.purchase_date.as_deref()),
            owner_name: row.customer_name,
        }
    }
}
