//! Actor Model

use serde::{Deserialize, Serialize};

/// Role of the signed-in session.
///
/// `Staff` covers both employees and managers; they share the same
/// global visibility over sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Customer,
    Staff,
}

/// Identity resolved from session state.
///
/// Owned by the session layer and passed into the core explicitly;
/// the core never reads identity from ambient storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Customer id, absent when nobody is signed in (or for staff
    /// sessions, which are identified by role alone here).
    pub id: Option<i64>,
    pub role: Role,
}

impl Actor {
    /// A signed-in customer.
    pub fn customer(id: i64) -> Self {
        Self {
            id: Some(id),
            role: Role::Customer,
        }
    }

    /// A staff session (employee or manager).
    pub fn staff() -> Self {
        Self {
            id: None,
            role: Role::Staff,
        }
    }

    /// An anonymous visitor.
    pub fn guest() -> Self {
        Self {
            id: None,
            role: Role::Customer,
        }
    }

    pub fn is_staff(&self) -> bool {
        self.role == Role::Staff
    }
}
