//! Storage layer for SmartSave
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionStore;

use crate::config::paths::SmartSavePaths;
use crate::error::SmartSaveError;

/// Main storage coordinator
pub struct Storage {
    paths: SmartSavePaths,
    pub transactions: TransactionStore,
}

impl Storage {
    /// Create a new Storage instance, creating the data directories
    pub fn new(paths: SmartSavePaths) -> Result<Self, SmartSaveError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SmartSavePaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SmartSavePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(
            storage.transactions.path(),
            temp_dir.path().join("data").join("transactions.json")
        );
    }
}
