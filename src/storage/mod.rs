pub mod json_backend;

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Key under which the expense collection is persisted.
pub const EXPENSES_KEY: &str = "expenses";
/// Key under which the saving collection is persisted.
pub const SAVINGS_KEY: &str = "savings";

/// Abstraction over key-value persistence surfaces capable of storing the
/// serialized transaction collections.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`; `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Ephemeral in-memory storage for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub use json_backend::JsonFileStorage;
