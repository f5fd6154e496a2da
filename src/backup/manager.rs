//! Backup export and import
//!
//! There is a single backup file at a fixed location. Export overwrites it;
//! import replaces the whole store with its contents.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use super::codec;
use crate::config::paths::SmartSavePaths;
use crate::error::{SmartSaveError, SmartSaveResult};
use crate::storage::Storage;

/// Moves the transaction list to and from the backup file
pub struct BackupManager<'a> {
    storage: &'a Storage,
    backup_file: PathBuf,
}

impl<'a> BackupManager<'a> {
    /// Create a manager using the backup location under the storage's base directory
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_paths(storage, storage.paths())
    }

    /// Create a manager writing to the backup location of `paths`
    pub fn with_paths(storage: &'a Storage, paths: &SmartSavePaths) -> Self {
        Self {
            storage,
            backup_file: paths.backup_file(),
        }
    }

    pub fn backup_file(&self) -> &PathBuf {
        &self.backup_file
    }

    /// Write every transaction to the backup file
    ///
    /// Returns the path written. An empty store is refused.
    pub fn export(&self) -> SmartSaveResult<PathBuf> {
        let transactions = self.storage.transactions.read_all()?;
        if transactions.is_empty() {
            return Err(SmartSaveError::NothingToExport);
        }

        if let Some(dir) = self.backup_file.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                SmartSaveError::Io(format!("Failed to create backup directory: {}", e))
            })?;
        }

        let json = codec::encode(&transactions)?;
        fs::write(&self.backup_file, json)
            .map_err(|e| SmartSaveError::Io(format!("Failed to write backup file: {}", e)))?;

        info!(
            path = %self.backup_file.display(),
            count = transactions.len(),
            "backup exported"
        );
        Ok(self.backup_file.clone())
    }

    /// Replace the store with the backup file's contents
    ///
    /// Returns the number of transactions restored. The store is left
    /// untouched when the file is missing or malformed.
    pub fn import(&self) -> SmartSaveResult<usize> {
        if !self.backup_file.exists() {
            return Err(SmartSaveError::BackupNotFound(self.backup_file.clone()));
        }

        let contents = fs::read(&self.backup_file)
            .map_err(|e| SmartSaveError::Io(format!("Failed to read backup file: {}", e)))?;
        let transactions = codec::decode(&contents)?;
        let count = transactions.len();

        self.storage.transactions.replace_all(transactions)?;

        info!(path = %self.backup_file.display(), count, "backup imported");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SmartSavePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn txn(title: &str, cents: i64, kind: TransactionType, category: &str) -> Transaction {
        Transaction::new(
            title,
            Money::from_cents(cents),
            category,
            kind,
            NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
        )
    }

    #[test]
    fn test_export_import_round_trip() {
        let (_temp_dir, storage) = create_test_storage();
        let manager = BackupManager::new(&storage);

        let originals = vec![
            txn("Pay", 300_000, TransactionType::Income, "Salary"),
            txn("Lunch", 1250, TransactionType::Expense, "Food"),
            txn("Bus", 275, TransactionType::Expense, "Transport"),
        ];
        for t in &originals {
            storage.transactions.create(t.clone()).unwrap();
        }

        let path = manager.export().unwrap();
        assert!(path.ends_with("SmartSave/backup.json"));

        storage.transactions.clear().unwrap();
        storage
            .transactions
            .create(txn("Stray", 100, TransactionType::Expense, "Food"))
            .unwrap();

        assert_eq!(manager.import().unwrap(), 3);
        assert_eq!(storage.transactions.read_all().unwrap(), originals);
    }

    #[test]
    fn test_export_empty_store_is_refused() {
        let (_temp_dir, storage) = create_test_storage();
        let manager = BackupManager::new(&storage);

        let err = manager.export().unwrap_err();
        assert!(matches!(err, SmartSaveError::NothingToExport));
        assert!(!manager.backup_file().exists());
    }

    #[test]
    fn test_import_missing_file() {
        let (_temp_dir, storage) = create_test_storage();
        let manager = BackupManager::new(&storage);

        let err = manager.import().unwrap_err();
        assert!(matches!(err, SmartSaveError::BackupNotFound(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_import_malformed_keeps_store() {
        let (_temp_dir, storage) = create_test_storage();
        let manager = BackupManager::new(&storage);

        storage
            .transactions
            .create(txn("Lunch", 1250, TransactionType::Expense, "Food"))
            .unwrap();

        fs::create_dir_all(manager.backup_file().parent().unwrap()).unwrap();
        fs::write(manager.backup_file(), "{ not a list").unwrap();

        let err = manager.import().unwrap_err();
        assert!(matches!(err, SmartSaveError::MalformedBackup(_)));
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_import_invalid_utf8_is_malformed() {
        let (_temp_dir, storage) = create_test_storage();
        let manager = BackupManager::new(&storage);

        storage
            .transactions
            .create(txn("Lunch", 1250, TransactionType::Expense, "Food"))
            .unwrap();

        fs::create_dir_all(manager.backup_file().parent().unwrap()).unwrap();
        fs::write(manager.backup_file(), [0xff, 0xfe, b'[', b']']).unwrap();

        let err = manager.import().unwrap_err();
        assert!(matches!(err, SmartSaveError::MalformedBackup(_)));
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_import_empty_array_clears_store() {
        let (_temp_dir, storage) = create_test_storage();
        let manager = BackupManager::new(&storage);

        storage
            .transactions
            .create(txn("Lunch", 1250, TransactionType::Expense, "Food"))
            .unwrap();
        fs::create_dir_all(manager.backup_file().parent().unwrap()).unwrap();
        fs::write(manager.backup_file(), "[]").unwrap();

        assert_eq!(manager.import().unwrap(), 0);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
