//! Path management for SmartSave
//!
//! Provides XDG-compliant path resolution for preferences, data, and the
//! backup file.
//!
//! ## Path Resolution Order
//!
//! 1. `SMARTSAVE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/smartsave` or `~/.config/smartsave`
//! 3. Windows: `%APPDATA%\smartsave`

use std::path::PathBuf;

use crate::error::SmartSaveError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SMARTSAVE_DATA_DIR";

/// Manages all paths used by SmartSave
#[derive(Debug, Clone)]
pub struct SmartSavePaths {
    /// Base directory for all SmartSave data
    base_dir: PathBuf,
}

impl SmartSavePaths {
    /// Create a new SmartSavePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SmartSaveError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SmartSavePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/smartsave/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/smartsave/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory holding the export file (~/.config/smartsave/SmartSave/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("SmartSave")
    }

    /// Get the path to the preferences file
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("preferences.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the fixed path written by export and read by import
    pub fn backup_file(&self) -> PathBuf {
        self.backup_dir().join("backup.json")
    }

    /// Ensure the base and data directories exist
    ///
    /// The backup directory is created lazily by export.
    pub fn ensure_directories(&self) -> Result<(), SmartSaveError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SmartSaveError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SmartSaveError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SmartSaveError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                SmartSaveError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("smartsave"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SmartSaveError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SmartSaveError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("smartsave"))
}
