//! Backup system for SmartSave
//!
//! Export writes the full transaction list to `SmartSave/backup.json` under
//! the data directory. Import reads that file back and replaces the store's
//! contents; it never merges.
//!
//! # Example
//!
//! ```rust,ignore
//! use smartsave::backup::BackupManager;
//! use smartsave::config::paths::SmartSavePaths;
//! use smartsave::storage::Storage;
//!
//! let storage = Storage::new(SmartSavePaths::new()?)?;
//! let manager = BackupManager::new(&storage);
//! let path = manager.export()?;
//! let restored = manager.import()?;
//! ```

pub mod codec;
mod manager;

pub use manager::BackupManager;
