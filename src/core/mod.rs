pub mod store;
pub mod summary;
pub mod validation;

pub use store::TransactionStore;
pub use summary::{DailyTotals, MonthlySummary};
pub use validation::{validate, Field, FieldError, TransactionDraft, ValidationErrors};
