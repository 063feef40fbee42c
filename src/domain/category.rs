//! Fixed category catalogs offered when a transaction is entered.
//!
//! These are process-wide constants, not user-editable. Stored transactions
//! keep the category as plain text; no referential integrity is enforced on
//! later reads.

use crate::domain::transaction::TransactionKind;

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Housing",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Other",
];

pub const SAVING_CATEGORIES: &[&str] = &[
    "Emergency Fund",
    "Retirement",
    "Vacation",
    "Education",
    "Investment",
    "Other",
];

/// Returns the catalog offered for the given kind.
pub fn categories_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Expense => EXPENSE_CATEGORIES,
        TransactionKind::Saving => SAVING_CATEGORIES,
    }
}

/// Checks whether `name` belongs to the kind's catalog.
pub fn is_known_category(kind: TransactionKind, name: &str) -> bool {
    categories_for(kind).contains(&name)
}
