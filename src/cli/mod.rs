//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod budget;
pub mod report;
pub mod settings;
pub mod transaction;

pub use backup::{handle_export, handle_import};
pub use budget::{handle_budget_command, recheck_budget, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{
    handle_currency_command, handle_notifications_command, handle_pin_command,
    handle_reminder_command, CurrencyCommands, PinCommands, ReminderCommands, Toggle,
};
pub use transaction::{handle_transaction_command, TransactionCommands};
