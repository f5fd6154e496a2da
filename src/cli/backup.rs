//! Backup CLI commands
//!
//! Export to and import from the single backup file.

use chrono::NaiveDate;

use super::budget::recheck_budget;
use crate::backup::BackupManager;
use crate::config::Settings;
use crate::error::SmartSaveResult;
use crate::notify::Notifier;
use crate::storage::Storage;

/// Write every transaction to the backup file
pub fn handle_export(storage: &Storage) -> SmartSaveResult<()> {
    let path = BackupManager::new(storage).export()?;
    println!("Backup exported to {}", path.display());
    Ok(())
}

/// Replace all transactions with the backup file's contents
pub fn handle_import(
    storage: &Storage,
    settings: &mut Settings,
    notifier: &dyn Notifier,
    today: NaiveDate,
) -> SmartSaveResult<()> {
    let manager = BackupManager::new(storage);
    let count = manager.import()?;
    println!(
        "Imported {} transactions from {}",
        count,
        manager.backup_file().display()
    );

    recheck_budget(storage, settings, notifier, today)
}
