//! Transaction store backed by transactions.json
//!
//! Every operation reads the whole collection from disk and every mutation
//! writes the whole collection back. There is no in-memory cache and no
//! index: the file is the single source of truth. Mutations are serialized
//! through one lock so two writers in the same process cannot lose each
//! other's changes.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::SmartSaveError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Durable, insertion-ordered list of transactions
pub struct TransactionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TransactionStore {
    /// Create a store over the given file; nothing is read until first use
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, SmartSaveError> {
        self.write_lock
            .lock()
            .map_err(|e| SmartSaveError::Storage(format!("Failed to acquire store lock: {}", e)))
    }

    fn load(&self) -> Result<Vec<Transaction>, SmartSaveError> {
        let data: TransactionData = read_json(&self.path)?;
        Ok(data.transactions)
    }

    fn persist(&self, transactions: Vec<Transaction>) -> Result<(), SmartSaveError> {
        let count = transactions.len();
        write_json_atomic(&self.path, &TransactionData { transactions })?;
        tracing::debug!(count, path = %self.path.display(), "transactions persisted");
        Ok(())
    }

    /// Append a transaction to the end of the list
    pub fn create(&self, txn: Transaction) -> Result<(), SmartSaveError> {
        let _guard = self.lock()?;
        let mut transactions = self.load()?;
        tracing::debug!(id = %txn.id, "creating transaction");
        transactions.push(txn);
        self.persist(transactions)
    }

    /// All transactions in insertion order
    ///
    /// Returns an empty list when nothing has been stored yet, and
    /// [`SmartSaveError::Corrupt`] when the file exists but cannot be decoded.
    pub fn read_all(&self) -> Result<Vec<Transaction>, SmartSaveError> {
        let _guard = self.lock()?;
        self.load()
    }

    /// Find a transaction by id
    pub fn get(&self, id: &TransactionId) -> Result<Option<Transaction>, SmartSaveError> {
        Ok(self.read_all()?.into_iter().find(|t| &t.id == id))
    }

    /// Replace the first entry with the same id, keeping its position
    ///
    /// Returns `false` (and writes nothing) if no entry has that id.
    pub fn update(&self, txn: Transaction) -> Result<bool, SmartSaveError> {
        let _guard = self.lock()?;
        let mut transactions = self.load()?;

        match transactions.iter().position(|t| t.id == txn.id) {
            Some(index) => {
                tracing::debug!(id = %txn.id, index, "updating transaction");
                transactions[index] = txn;
                self.persist(transactions)?;
                Ok(true)
            }
            None => {
                tracing::debug!(id = %txn.id, "update skipped, id not stored");
                Ok(false)
            }
        }
    }

    /// Remove every entry with the given id
    ///
    /// Returns how many entries were removed; zero is not an error.
    pub fn delete(&self, id: &TransactionId) -> Result<usize, SmartSaveError> {
        let _guard = self.lock()?;
        let mut transactions = self.load()?;

        let before = transactions.len();
        transactions.retain(|t| &t.id != id);
        let removed = before - transactions.len();

        if removed > 0 {
            tracing::debug!(%id, removed, "deleting transaction");
            self.persist(transactions)?;
        }
        Ok(removed)
    }

    /// Empty the store
    pub fn clear(&self) -> Result<(), SmartSaveError> {
        let _guard = self.lock()?;
        tracing::debug!("clearing all transactions");
        self.persist(Vec::new())
    }

    /// Clear the store and insert `transactions` in order, as one write
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> Result<(), SmartSaveError> {
        let _guard = self.lock()?;
        tracing::debug!(count = transactions.len(), "replacing all transactions");
        self.persist(transactions)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, SmartSaveError> {
        Ok(self.read_all()?.len())
    }
}
