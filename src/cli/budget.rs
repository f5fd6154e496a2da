//! Budget CLI commands
//!
//! Setting the monthly ceiling and showing progress against it.

use chrono::NaiveDate;
use clap::Subcommand;

use super::transaction::parse_amount;
use crate::config::Settings;
use crate::display::{format_budget_status, CurrencyFormatter};
use crate::error::SmartSaveResult;
use crate::notify::Notifier;
use crate::services::{set_ceiling, BudgetService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly spending ceiling
    Set {
        /// Amount (e.g., "1000" or "1,250.00")
        amount: String,
    },

    /// Show this month's spending against the ceiling
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &mut Settings,
    notifier: &dyn Notifier,
    today: NaiveDate,
    cmd: BudgetCommands,
) -> SmartSaveResult<()> {
    let formatter = CurrencyFormatter::from_settings(settings);

    match cmd {
        BudgetCommands::Set { amount } => {
            let ceiling = parse_amount(&amount)?;
            set_ceiling(settings, ceiling)?;
            settings.save(storage.paths())?;

            println!("Monthly budget set to {}", formatter.format(ceiling));
            recheck_budget(storage, settings, notifier, today)?;
        }

        BudgetCommands::Status => {
            let status = BudgetService::new(storage).status(settings, today)?;
            print!("{}", format_budget_status(&status, &formatter));
        }
    }

    Ok(())
}

/// Re-run the threshold check after transactions changed
///
/// Settings are saved only when an alert was sent.
pub fn recheck_budget(
    storage: &Storage,
    settings: &mut Settings,
    notifier: &dyn Notifier,
    today: NaiveDate,
) -> SmartSaveResult<()> {
    if BudgetService::new(storage).check_threshold(settings, today, notifier)? {
        settings.save(storage.paths())?;
    }
    Ok(())
}
