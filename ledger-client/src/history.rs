//! History aggregator
//!
//! Fetches the acting scope's transactions from all three domains in
//! parallel, normalizes them, and merges them into one chronological
//! view. All-or-nothing: a partial two-of-three result is never shown
//! as complete, so revenue/spend is never silently under-reported.

use crate::domain::{Commodity, Dining, SaleDomain, Ticket};
use crate::error::{LedgerError, LedgerResult};
use crate::http::ApiClient;
use crate::money::{format_amount, to_decimal};
use crate::scope::Scope;
use rust_decimal::Decimal;
use shared::client::{CommoditySale, DiningOrder, TicketSale};
use shared::models::{Actor, Transaction};
use std::cmp::Ordering;

/// Aggregated, chronologically ordered purchase history.
///
/// Recomputed on every load; never persisted. `total` is the exact
/// decimal sum over the whole list, rounded only for display.
#[derive(Debug, Clone)]
pub struct HistoryView {
    pub transactions: Vec<Transaction>,
    pub total: Decimal,
}

impl HistoryView {
    /// Build a view from normalized transactions: stable descending
    /// sort on `occurred_at` (undated entries after all dated ones,
    /// original relative order kept), exact total.
    pub fn from_transactions(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by(|a, b| match (a.occurred_at, b.occurred_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        let total: Decimal = transactions.iter().map(|t| to_decimal(t.price)).sum();
        Self {
            transactions,
            total,
        }
    }

    /// Total formatted for display (2 decimal places).
    pub fn total_display(&self) -> String {
        format_amount(self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Result of a history load.
#[derive(Debug)]
pub enum HistoryOutcome {
    /// No session id to scope the view by; show a login prompt, not an
    /// error state. No fetch was issued.
    LoginRequired,
    Loaded(HistoryView),
}

/// Load the aggregated history for an actor.
///
/// The three domain fetches run concurrently and join all-or-nothing;
/// if any fails the whole load fails with `AggregationFailed`. Every
/// call re-fetches, nothing is cached.
pub async fn load_history(client: &ApiClient, actor: &Actor) -> LedgerResult<HistoryOutcome> {
    let scope = match Scope::resolve(actor) {
        Ok(scope) => scope,
        Err(LedgerError::NotAuthenticated) => return Ok(HistoryOutcome::LoginRequired),
        Err(e) => return Err(e),
    };

    let (tickets, commodities, orders) = tokio::try_join!(
        client.fetch_sales::<Ticket>(&scope),
        client.fetch_sales::<Commodity>(&scope),
        client.fetch_sales::<Dining>(&scope),
    )?;

    let view = assemble(tickets, commodities, orders);
    tracing::info!(
        global = scope.is_global(),
        count = view.transactions.len(),
        total = %view.total,
        "loaded purchase history"
    );
    Ok(HistoryOutcome::Loaded(view))
}

/// Normalize and merge the three domains' raw rows. Source order
/// within a domain is preserved going into the stable sort.
fn assemble(
    tickets: Vec<TicketSale>,
    commodities: Vec<CommoditySale>,
    orders: Vec<DiningOrder>,
) -> HistoryView {
    let transactions: Vec<Transaction> = tickets
        .into_iter()
        .map(Ticket::normalize)
        .chain(commodities.into_iter().map(Commodity::normalize))
        .chain(orders.into_iter().map(Dining::normalize))
        .collect();
    HistoryView::from_transactions(transactions)
}
