//! Domain model for dated expense and saving records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partition a transaction belongs to, fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Saving,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Saving => "saving",
        };
        f.write_str(label)
    }
}

/// A single dated, categorized money movement.
///
/// Dates stay `YYYY-MM-DD` strings so they sort lexically and prefix-match
/// against a `YYYY-MM` month key. The kind is serialized under the wire field
/// name `type` to stay compatible with previously persisted records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: String,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Builds a transaction with a fresh v4 identifier.
    pub fn new(input: NewTransaction) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: input.date,
            amount: input.amount,
            category: input.category,
            description: input.description,
            kind: input.kind,
        }
    }

    /// The `YYYY-MM` prefix of the transaction date.
    pub fn month_key(&self) -> &str {
        self.date.get(..7).unwrap_or("")
    }

    /// Two-digit day component of the date, when the date is well-formed.
    pub fn day_component(&self) -> Option<&str> {
        self.date.get(8..10)
    }
}

/// Validated input for creating a transaction; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
}
