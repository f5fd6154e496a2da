//! Core data models for SmartSave
//!
//! Transactions, their categories and ids, and the `Money` amount type.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{ExpenseCategory, INCOME_CATEGORIES};
pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
