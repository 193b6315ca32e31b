//! Dining domain adapter
//!
//! The restaurant service is the drifted one: order rows may carry
//! the amount under `total` or the shared `price` field, and the
//! timestamp under `orderDate` or the shared `purchaseDate`. The
//! domain-specific field always wins; the shared one is the fallback.

use super::{Confirmation, SaleDomain, parse_occurred_at, sanitize_payment, sanitize_price};
use shared::client::{DiningOrder, DiningOrderReceipt, DiningOrderRequest, MenuItem};
use shared::models::{CatalogItem, Domain, PaymentMethod, Transaction};

/// In-park restaurant orders.
#[derive(Debug, Clone, Copy)]
pub struct Dining;

impl SaleDomain for Dining {
    const DOMAIN: Domain = Domain::Dining;

    type CatalogRow = MenuItem;
    type PurchaseRequest = DiningOrderRequest;
    type Receipt = DiningOrderReceipt;
    type SaleRow = DiningOrder;

    fn catalog_path() -> &'static str {
        "restaurant/menu"
    }

    fn purchase_path() -> &'static str {
        "restaurant/order"
    }

    fn payment_methods() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::Credit,
            PaymentMethod::Debit,
            PaymentMethod::Cash,
            PaymentMethod::Mobile,
        ]
    }

    fn catalog_item(row: Self::CatalogRow) -> CatalogItem {
        CatalogItem {
            item_id: row.dish_id,
            display_name: row.dish_name,
            unit_price: row.price,
        }
    }

    fn purchase_request(
        customer_id: i64,
        item_id: i64,
        total_price: f64,
        method: PaymentMethod,
    ) -> Self::PurchaseRequest {
        DiningOrderRequest {
            customer_id,
            dish_id: item_id,
            total_price,
            payment_method: method.as_str().to_string(),
        }
    }

    fn receipt(receipt: Self::Receipt) -> Confirmation {
        Confirmation::new(&receipt.message, receipt.order_id)
    }

    fn normalize(row: Self::SaleRow) -> Transaction {
        let price = sanitize_price(row.total.or(row.price));
        let occurred_at =
            parse_occurred_at(row.order_date.as_deref().or(row.purchase_date.as_deref()));
        Transaction {
            id: row.order_id,
            domain: Domain::Dining,
            label: row
                .dish_name
                .unwrap_or_else(|| format!("Order #{}", row.order_id)),
            price,
            payment_method: sanitize_payment(row.payment_method),
            occurred_at,
            owner_name: row.customer_name,
        }
    }
}
