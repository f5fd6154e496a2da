//! CLI commands for reports

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_breakdown, format_summary, CurrencyFormatter};
use crate::error::SmartSaveResult;
use crate::models::{ExpenseCategory, INCOME_CATEGORIES};
use crate::reports::{expense_by_category, Summary};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show income, expense and savings totals
    Summary,

    /// Show expenses broken down by category
    #[command(alias = "analysis")]
    Breakdown,

    /// List the categories a transaction can use
    Categories,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> SmartSaveResult<()> {
    let formatter = CurrencyFormatter::from_settings(settings);

    match cmd {
        ReportCommands::Summary => {
            let transactions = storage.transactions.read_all()?;
            let summary = Summary::from_transactions(&transactions, today);
            print!("{}", format_summary(&summary, &formatter));
        }

        ReportCommands::Breakdown => {
            let transactions = storage.transactions.read_all()?;
            let rows = expense_by_category(&transactions);
            print!("{}", format_category_breakdown(&rows, &formatter));
        }

        ReportCommands::Categories => {
            println!("Expense categories:");
            for category in ExpenseCategory::ALL {
                println!("  {}", category);
            }
            println!();
            println!("Income categories:");
            for category in INCOME_CATEGORIES {
                println!("  {}", category);
            }
        }
    }

    Ok(())
}
