//! Ticket domain adapter

use super::{Confirmation, SaleDomain, parse_occurred_at, sanitize_payment, sanitize_price};
use shared::client::{TicketPurchaseReceipt, TicketPurchaseRequest, TicketSale, TicketType};
use shared::models::{CatalogItem, Domain, PaymentMethod, Transaction};

/// Park admission tickets.
#[derive(Debug, Clone, Copy)]
pub struct Ticket;

impl SaleDomain for Ticket {
    const DOMAIN: Domain = Domain::Ticket;

    type CatalogRow = TicketType;
    type PurchaseRequest = TicketPurchaseRequest;
    type Receipt = TicketPurchaseReceipt;
    type SaleRow = TicketSale;

    fn catalog_path() -> &'static str {
        "ticket/types"
    }

    fn purchase_path() -> &'static str {
        "ticket/purchase"
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
            item_id: row.ticket_type_id,
            display_name: row.type_name,
            unit_price: row.price,
        }
    }

    fn purchase_request(
        customer_id: i64,
        item_id: i64,
        total_price: f64,
        method: PaymentMethod,
    ) -> Self::PurchaseRequest {
        TicketPurchaseRequest {
            customer_id,
            ticket_type_id: item_id,
            total_price,
            payment_method: method.as_str().to_string(),
        }
    }

    fn receipt(receipt: Self::Receipt) -> Confirmation {
        Confirmation::new(&receipt.message, receipt.ticket_id)
    }

    fn normalize(row: Self::SaleRow) -> Transaction {
        Transaction {
            id: row.ticket_id,
            domain: Domain::Ticket,
            label: row
                .type_name
                .unwrap_or_else(|| format!("Order #{}", row.ticket_id)),
            price: sanitize_price(row.total_price),
            payment_method: sanitize_payment(row.payment_method),
            occurred_at: parse_occurred_at(row.purchase_date.as_deref()),
            owner_name: row.customer_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_full_row() {
        let tx = Ticket::normalize(TicketSale {
            ticket_id: 42,
            type_name: Some("Day Pass".to_string()),
            total_price: Some(59.99),
            payment_method: Some("cash".to_string()),
            purchase_date: Some("2024-03-01T10:00:00".to_string()),
            customer_name: Some("Ada".to_string()),
        });
        assert_eq!(tx.id, 42);
        assert_eq!(tx.domain, Domain::Ticket);
        assert_eq!(tx.label, "Day Pass");
        assert_eq!(tx.price, 59.99);
        assert_eq!(tx.payment_method, "cash");
        assert!(tx.occurred_at.is_some());
        assert_eq!(tx.owner_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn sparse_row_gets_defaults() {
        let tx = Ticket::normalize(TicketSale {
            ticket_id: 7,
            type_name: None,
            total_price: None,
            payment_method: None,
            purchase_date: None,
            customer_name: None,
        });
        assert_eq!(tx.label, "Order #7");
        assert_eq!(tx.price, 0.0);
        assert_eq!(tx.payment_method, "unknown");
        assert!(tx.occurred_at.is_none());
    }
}
