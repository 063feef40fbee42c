pub mod category;
pub mod month;
pub mod transaction;

pub use category::{categories_for, is_known_category, EXPENSE_CATEGORIES, SAVING_CATEGORIES};
pub use month::{current_month_key, month_key_for, recent_month_keys};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
