//! Service layer for SmartSave
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and the budget alert state.

pub mod budget;
pub mod transaction;

pub use budget::{evaluate_threshold, set_ceiling, BudgetService, BudgetStatus};
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, DEFAULT_RECENT_COUNT,
};
