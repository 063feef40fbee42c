//! In-memory transaction store mirrored to key-value persistence.

use tracing::debug;
use uuid::Uuid;

use crate::domain::{NewTransaction, Transaction, TransactionKind};
use crate::storage::{KeyValueStorage, Result, EXPENSES_KEY, SAVINGS_KEY};

/// Owns the authoritative expense and saving collections and keeps the
/// persistence surface in sync.
///
/// Every mutation writes the full snapshot of the affected collection(s)
/// before returning. When a write fails the in-memory mutation is not rolled
/// back, so memory and persisted state may diverge until the next successful
/// write.
pub struct TransactionStore<S: KeyValueStorage> {
    storage: S,
    expenses: Vec<Transaction>,
    savings: Vec<Transaction>,
}

impl<S: KeyValueStorage> TransactionStore<S> {
    /// Initializes the store from the persistence surface. An absent key or an
    /// unparseable value loads as an empty collection; only storage access
    /// failures surface as errors.
    pub fn load(storage: S) -> Result<Self> {
        let expenses = read_collection(&storage, EXPENSES_KEY)?;
        let savings = read_collection(&storage, SAVINGS_KEY)?;
        debug!(
            expenses = expenses.len(),
            savings = savings.len(),
            "loaded transaction store"
        );
        Ok(Self {
            storage,
            expenses,
            savings,
        })
    }

    /// Appends a new transaction with a fresh id to the kind's collection,
    /// persists that collection, and returns the created record.
    ///
    /// Input constraints (positive amount, well-formed date, non-empty
    /// category) are the validation boundary's job; the store trusts its
    /// caller.
    pub fn create(&mut self, input: NewTransaction) -> Result<Transaction> {
        let transaction = Transaction::new(input);
        let kind = transaction.kind;
        debug!(id = %transaction.id, %kind, "creating transaction");
        self.collection_mut(kind).push(transaction.clone());
        self.persist(kind)?;
        Ok(transaction)
    }

    /// Replaces the record with the same id in the collection named by the
    /// transaction's kind, keeping the id. A missing id is a silent no-op;
    /// the collection is persisted either way.
    pub fn update(&mut self, transaction: Transaction) -> Result<()> {
        let kind = transaction.kind;
        let collection = self.collection_mut(kind);
        if let Some(slot) = collection.iter_mut().find(|t| t.id == transaction.id) {
            *slot = transaction;
        } else {
            debug!(id = %transaction.id, %kind, "update matched no record");
        }
        self.persist(kind)
    }

    /// Removes the id from both collections (at most one contains it) and
    /// persists both unconditionally. Deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        self.expenses.retain(|t| t.id != id);
        self.savings.retain(|t| t.id != id);
        self.persist(TransactionKind::Expense)?;
        self.persist(TransactionKind::Saving)?;
        Ok(())
    }

    /// The kind's collection in insertion order, oldest first.
    pub fn list(&self, kind: TransactionKind) -> &[Transaction] {
        match kind {
            TransactionKind::Expense => &self.expenses,
            TransactionKind::Saving => &self.savings,
        }
    }

    pub fn expenses(&self) -> &[Transaction] {
        &self.expenses
    }

    pub fn savings(&self) -> &[Transaction] {
        &self.savings
    }

    fn collection_mut(&mut self, kind: TransactionKind) -> &mut Vec<Transaction> {
        match kind {
            TransactionKind::Expense => &mut self.expenses,
            TransactionKind::Saving => &mut self.savings,
        }
    }

    fn persist(&self, kind: TransactionKind) -> Result<()> {
        let (key, collection) = match kind {
            TransactionKind::Expense => (EXPENSES_KEY, &self.expenses),
            TransactionKind::Saving => (SAVINGS_KEY, &self.savings),
        };
        let json = serde_json::to_string(collection)?;
        self.storage.set(key, &json)
    }
}

fn read_collection<S: KeyValueStorage>(storage: &S, key: &str) -> Result<Vec<Transaction>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(collection) => Ok(collection),
        Err(err) => {
            debug!(key, %err, "unparseable collection, starting empty");
            Ok(Vec::new())
        }
    }
}
