//! Access gate: visibility scope resolution
//!
//! One resolution per session turns the loosely-typed session role
//! into a two-variant scope. Every history endpoint pair (global vs
//! self) is selected through this type, never re-derived per screen.

use crate::error::{LedgerError, LedgerResult};
use shared::models::{Actor, Domain, Role};

/// Visibility scope of the acting session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Staff view across all customers.
    Global,
    /// Customer view limited to their own transactions.
    SelfOnly(i64),
}

impl Scope {
    /// Resolve the scope for an actor. Pure; no side effects.
    ///
    /// Customers without a session id get `NotAuthenticated`, and the
    /// caller must show a login prompt instead of fetching anything.
    pub fn resolve(actor: &Actor) -> LedgerResult<Self> {
        match actor.role {
            Role::Staff => Ok(Scope::Global),
            Role::Customer => match actor.id {
                Some(id) => Ok(Scope::SelfOnly(id)),
                None => Err(LedgerError::NotAuthenticated),
            },
        }
    }

    /// History endpoint this scope is entitled to for a domain.
    pub fn sales_path(&self, domain: Domain) -> String {
        match (domain, self) {
            (Domain::Ticket, Scope::Global) => "ticket/sales".to_string(),
            (Domain::Ticket, Scope::SelfOnly(id)) => format!("ticket/customer/{id}"),
            (Domain::Commodity, Scope::Global) => "commodity/sales".to_string(),
            (Domain::Commodity, Scope::SelfOnly(id)) => format!("commodity/customer/{id}"),
            (Domain::Dining, Scope::Global) => "restaurant/orders".to_string(),
            (Domain::Dining, Scope::SelfOnly(id)) => format!("restaurant/customer/{id}/orders"),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global)
    }
}
