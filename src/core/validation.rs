//! Field-level validation applied before a transaction is constructed.
//!
//! Form input arrives as plain text. Validation reports every failing field at
//! once so the caller can surface inline per-field messages; only a fully
//! valid draft yields a [`NewTransaction`]. The store itself never validates.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::{is_known_category, NewTransaction, TransactionKind};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, not-yet-validated form input for one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// Fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Amount,
    Category,
}

/// A single failed field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Collection of per-field failures; empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for the given field, when that field failed.
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|err| err.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Validates a draft for the given kind, yielding store-ready input or the
/// full set of field failures.
pub fn validate(
    kind: TransactionKind,
    draft: &TransactionDraft,
) -> Result<NewTransaction, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let date = draft.date.trim();
    if date.is_empty() {
        errors.push(Field::Date, "Date is required");
    } else if !is_well_formed_date(date) {
        errors.push(Field::Date, "Date must be a valid YYYY-MM-DD date");
    }

    let amount_raw = draft.amount.trim();
    let mut amount = 0.0;
    if amount_raw.is_empty() {
        errors.push(Field::Amount, "Amount is required");
    } else {
        match amount_raw.parse::<f64>() {
            Ok(value) if value > 0.0 => amount = value,
            _ => errors.push(Field::Amount, "Amount must be a positive number"),
        }
    }

    let category = draft.category.trim();
    if category.is_empty() {
        errors.push(Field::Category, "Category is required");
    } else if !is_known_category(kind, category) {
        errors.push(
            Field::Category,
            format!("Category must be one of the {kind} categories"),
        );
    }

    if errors.is_empty() {
        Ok(NewTransaction {
            kind,
            date: date.to_string(),
            amount,
            category: category.to_string(),
            description: draft.description.clone(),
        })
    } else {
        Err(errors)
    }
}

/// Well-formed means ten zero-padded characters naming a real calendar date.
fn is_well_formed_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(date: &str, amount: &str, category: &str) -> TransactionDraft {
        TransactionDraft {
            date: date.into(),
            amount: amount.into(),
            category: category.into(),
            description: String::new(),
        }
    }

    #[test]
    fn valid_draft_yields_new_transaction() {
        let input = validate(
            TransactionKind::Expense,
            &draft("2024-03-05", "40", "Food"),
        )
        .unwrap();
        assert_eq!(input.date, "2024-03-05");
        assert_eq!(input.amount, 40.0);
        assert_eq!(input.category, "Food");
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = validate(TransactionKind::Expense, &draft("", "", "")).unwrap_err();
        assert_eq!(errors.errors().len(), 3);
        assert_eq!(errors.message_for(Field::Date), Some("Date is required"));
        assert_eq!(errors.message_for(Field::Amount), Some("Amount is required"));
        assert_eq!(
            errors.message_for(Field::Category),
            Some("Category is required")
        );
        assert!(format!("{errors}").contains("Date is required"));
    }

    #[test]
    fn non_positive_or_non_numeric_amounts_fail() {
        for amount in ["0", "-5", "abc", "NaN"] {
            let errors =
                validate(TransactionKind::Expense, &draft("2024-03-05", amount, "Food"))
                    .unwrap_err();
            assert_eq!(
                errors.message_for(Field::Amount),
                Some("Amount must be a positive number"),
                "amount {amount:?} should fail"
            );
        }
    }

    #[test]
    fn malformed_dates_fail() {
        for date in ["2024-3-5", "2024-13-01", "2024-02-30", "yesterday"] {
            let errors =
                validate(TransactionKind::Expense, &draft(date, "10", "Food")).unwrap_err();
            assert!(
                errors.message_for(Field::Date).is_some(),
                "date {date:?} should fail"
            );
        }
    }

    #[test]
    fn category_must_match_the_kind_catalog() {
        let errors =
            validate(TransactionKind::Saving, &draft("2024-03-05", "10", "Food")).unwrap_err();
        assert!(errors.message_for(Field::Category).is_some());

        assert!(validate(
            TransactionKind::Saving,
            &draft("2024-03-05", "10", "Retirement")
        )
        .is_ok());
    }
}
