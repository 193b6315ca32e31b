//! Checkout state machine
//!
//! Typestate-driven flow: `Browsing -> ItemSelected -> submit`.
//! Submission consumes the handle, so a second submit cannot be
//! issued while one is in flight; the handle comes back in the
//! outcome. A failed submission returns at `ItemSelected` with the
//! intent retained, so the user can retry without reselecting; a
//! confirmed one returns at `Browsing` with the intent cleared.

use crate::domain::{Confirmation, SaleDomain};
use crate::error::{LedgerError, LedgerResult};
use crate::http::ApiClient;
use shared::models::{Actor, CatalogItem, PaymentMethod};
use std::marker::PhantomData;

/// Browsing state: catalog shown, nothing selected.
#[derive(Debug)]
pub struct Browsing;

/// Selected state: one item picked, payment method chosen.
#[derive(Debug)]
pub struct ItemSelected {
    intent: PurchaseIntent,
}

/// Transient purchase under construction. In-memory only; destroyed
/// on submission or cancel.
///
/// The unit price is copied from the catalog snapshot at selection
/// time and is not writable afterwards, so a tampered client-side
/// price can never reach the backend.
#[derive(Debug, Clone)]
pub struct PurchaseIntent {
    item_id: i64,
    display_name: String,
    unit_price: f64,
    payment_method: PaymentMethod,
}

impl PurchaseIntent {
    pub fn item_id(&self) -> i64 {
        self.item_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
}

/// Checkout handle for one domain `D`, parameterized by state.
#[derive(Debug)]
pub struct Checkout<D: SaleDomain, S> {
    catalog: Vec<CatalogItem>,
    state: S,
    _domain: PhantomData<D>,
}

/// Outcome of a submission.
#[derive(Debug)]
pub enum Submission<D: SaleDomain> {
    /// Backend recorded the sale; back to browsing, intent cleared.
    Confirmed {
        confirmation: Confirmation,
        next: Checkout<D, Browsing>,
    },
    /// Submission failed; still at `ItemSelected`, intent retained.
    Failed {
        error: LedgerError,
        retry: Checkout<D, ItemSelected>,
    },
}

impl<D: SaleDomain> Checkout<D, Browsing> {
    /// Start a checkout session by fetching a fresh catalog snapshot.
    pub async fn begin(client: &ApiClient) -> LedgerResult<Self> {
        let catalog = client.fetch_catalog::<D>().await?;
        Ok(Self::from_snapshot(catalog))
    }

    /// Start from an already-fetched snapshot.
    pub fn from_snapshot(catalog: Vec<CatalogItem>) -> Self {
        Self {
            catalog,
            state: Browsing,
            _domain: PhantomData,
        }
    }

    /// Select an item. It must exist in the snapshot; the intent's
    /// unit price comes from the snapshot entry.
    pub fn select(self, item_id: i64) -> Result<Checkout<D, ItemSelected>, (Self, LedgerError)> {
        let Some(item) = self.catalog.iter().find(|i| i.item_id == item_id) else {
            return Err((self, LedgerError::ItemNotInCatalog(item_id)));
        };
        let intent = PurchaseIntent {
            item_id: item.item_id,
            display_name: item.display_name.clone(),
            unit_price: item.unit_price,
            payment_method: PaymentMethod::default(),
        };
        Ok(Checkout {
            catalog: self.catalog,
            state: ItemSelected { intent },
            _domain: PhantomData,
        })
    }
}

impl<D: SaleDomain> Checkout<D, ItemSelected> {
    pub fn intent(&self) -> &PurchaseIntent {
        &self.state.intent
    }

    /// Change the payment method. Stays at `ItemSelected`.
    pub fn choose_payment(&mut self, method: PaymentMethod) -> LedgerResult<()> {
        if !D::offers(method) {
            return Err(LedgerError::PaymentNotOffered {
                domain: D::DOMAIN,
                method,
            });
        }
        self.state.intent.payment_method = method;
        Ok(())
    }

    /// Drop the selection and go back to browsing the same snapshot.
    pub fn cancel(self) -> Checkout<D, Browsing> {
        Checkout {
            catalog: self.catalog,
            state: Browsing,
            _domain: PhantomData,
        }
    }

    /// Submit the purchase. Requires a signed-in customer; without a
    /// session id this fails before any network call is made.
    ///
    /// Consuming `self` means no other checkout operation can run
    /// while the POST is in flight.
    pub async fn submit(self, client: &ApiClient, actor: &Actor) -> Submission<D> {
        let Some(customer_id) = actor.id else {
            return Submission::Failed {
                error: LedgerError::NotAuthenticated,
                retry: self,
            };
        };

        let intent = &self.state.intent;
        let request = D::purchase_request(
            customer_id,
            intent.item_id,
            intent.unit_price,
            intent.payment_method,
        );
        match client.submit_purchase::<D>(&request).await {
            Ok(confirmation) => Submission::Confirmed {
                confirmation,
                next: Checkout {
                    catalog: self.catalog,
                    state: Browsing,
                    _domain: PhantomData,
                },
            },
            Err(error) => Submission::Failed { error, retry: self },
        }
    }
}

impl<D: SaleDomain, S> Checkout<D, S> {
    /// Catalog snapshot this session is working from.
    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Commodity, Ticket};

    fn day_pass_catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                item_id: 1,
                display_name: "Day Pass".to_string(),
                unit_price: 59.99,
            },
            CatalogItem {
                item_id: 2,
                display_name: "Season Pass".to_string(),
                unit_price: 199.0,
            },
        ]
    }

    #[test]
    fn select_copies_price_from_snapshot() {
        let checkout = Checkout::<Ticket, Browsing>::from_snapshot(day_pass_catalog());
        let selected = checkout.select(1).unwrap();
        assert_eq!(selected.intent().unit_price(), 59.99);
        assert_eq!(selected.intent().display_name(), "Day Pass");
        assert_eq!(selected.intent().payment_method(), PaymentMethod::Credit);
    }

    #[test]
    fn select_unknown_item_keeps_browsing() {
        let checkout = Checkout::<Ticket, Browsing>::from_snapshot(day_pass_catalog());
        let (checkout, err) = checkout.select(99).unwrap_err();
        assert!(matches!(err, LedgerError::ItemNotInCatalog(99)));
        // handle survives the failed transition
        assert_eq!(checkout.catalog().len(), 2);
    }

    #[test]
    fn choose_payment_respects_domain_offering() {
        let catalog = vec![CatalogItem {
            item_id: 5,
            display_name: "Plush Otter".to_string(),
            unit_price: 24.5,
        }];
        let mut selected = Checkout::<Commodity, Browsing>::from_snapshot(catalog)
            .select(5)
            .unwrap();
        let err = selected.choose_payment(PaymentMethod::Mobile).unwrap_err();
        assert!(matches!(err, LedgerError::PaymentNotOffered { .. }));
        // method unchanged after the rejected choice
        assert_eq!(selected.intent().payment_method(), PaymentMethod::Credit);

        selected.choose_payment(PaymentMethod::Cash).unwrap();
        assert_eq!(selected.intent().payment_method(), PaymentMethod::Cash);
    }

    #[test]
    fn cancel_returns_to_browsing() {
        let selected = Checkout::<Ticket, Browsing>::from_snapshot(day_pass_catalog())
            .select(2)
            .unwrap();
        let browsing = selected.cancel();
        assert_eq!(browsing.catalog().len(), 2);
    }

    #[tokio::test]
    async fn submit_without_session_fails_before_network() {
        // Config points at a closed port; NotAuthenticated means the
        // request was never attempted, so this cannot error on I/O.
        let client = crate::ClientConfig::new("http://127.0.0.1:1").build();
        let selected = Checkout::<Ticket, Browsing>::from_snapshot(day_pass_catalog())
            .select(1)
            .unwrap();
        match selected.submit(&client, &Actor::guest()).await {
            Submission::Failed { error, retry } => {
                assert!(matches!(error, LedgerError::NotAuthenticated));
                assert_eq!(retry.intent().item_id(), 1);
            }
            Submission::Confirmed { .. } => panic!("must not submit without a session"),
        }
    }
}
