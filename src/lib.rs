//! SmartSave - personal finance tracking
//!
//! This library provides the core of the SmartSave expense tracker: a durable
//! transaction store, aggregate reports over it, currency formatting, a
//! monthly budget alert and JSON backup export/import.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management and user preferences
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories)
//! - `storage`: JSON file storage layer
//! - `reports`: Totals, category breakdown and recent activity
//! - `services`: Business logic layer
//! - `notify`: Notification requests and the daily reminder time
//! - `security`: PIN lock
//! - `backup`: Backup export and import
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `smartsave` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use smartsave::config::{paths::SmartSavePaths, settings::Settings};
//! use smartsave::storage::Storage;
//!
//! let paths = SmartSavePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let transactions = storage.transactions.read_all()?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod reports;
pub mod security;
pub mod services;
pub mod storage;

use std::sync::Once;

pub use error::{SmartSaveError, SmartSaveResult};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// Defaults to warnings only; `RUST_LOG` replaces the default when set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("smartsave=warn"));

        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
