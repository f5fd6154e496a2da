//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, reports and amounts for
//! terminal display.

pub mod currency;
pub mod report;
pub mod transaction;

pub use currency::{extract_symbol, format_grouped, CurrencyFormatter};
pub use report::{format_budget_status, format_category_breakdown, format_summary};
pub use transaction::{format_transaction_details, format_transaction_register};
