//! Backup wire format
//!
//! A backup is a bare JSON array of transactions in store order, each
//! `{id, title, amount, category, type, date}` with the date as epoch
//! milliseconds.

use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::Transaction;

/// Serialize transactions to the backup format
pub fn encode(transactions: &[Transaction]) -> SmartSaveResult<String> {
    serde_json::to_string_pretty(transactions)
        .map_err(|e| SmartSaveError::Json(format!("Failed to serialize backup: {}", e)))
}

/// Parse the backup format from raw file bytes
///
/// Anything that is not UTF-8 JSON of the expected shape is `MalformedBackup`.
pub fn decode(contents: &[u8]) -> SmartSaveResult<Vec<Transaction>> {
    serde_json::from_slice(contents).map_err(|e| SmartSaveError::MalformedBackup(e.to_string()))
}
