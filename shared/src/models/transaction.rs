//! Normalized Transaction Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sale domain a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Ticket,
    Commodity,
    Dining,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Ticket => "ticket",
            Domain::Commodity => "commodity",
            Domain::Dining => "dining",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common shape every domain's sale record is normalized into.
///
/// `occurred_at` is `None` when the source record carried a missing or
/// unparseable timestamp; such entries sort after all dated ones.
/// `price` is never negative after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub domain: Domain,
    pub label: String,
    pub price: f64,
    pub payment_method: String,
    pub occurred_at: Option<DateTime<Utc>>,
    /// Customer name, populated on staff-facing global views.
    pub owner_name: Option<String>,
}
