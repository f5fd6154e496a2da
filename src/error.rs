//! Custom error types for SmartSave
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for SmartSave operations
#[derive(Error, Debug)]
pub enum SmartSaveError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input (amounts, titles, PINs, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Persisted data exists but cannot be decoded
    #[error("Stored data in {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// Storage errors (locks, temp files, renames)
    #[error("Storage error: {0}")]
    Storage(String),

    /// No backup file at the well-known location
    #[error("Backup file not found: {}", .0.display())]
    BackupNotFound(PathBuf),

    /// Backup file exists but does not hold a transaction list
    #[error("Backup file is malformed: {0}")]
    MalformedBackup(String),

    /// Export requested with an empty store
    #[error("No transactions to export")]
    NothingToExport,
}

impl SmartSaveError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::BackupNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means persisted data could not be decoded
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. } | Self::MalformedBackup(_))
    }
}

impl From<std::io::Error> for SmartSaveError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SmartSaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SmartSave operations
pub type SmartSaveResult<T> = Result<T, SmartSaveError>;
