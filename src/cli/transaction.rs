//! Transaction CLI commands
//!
//! Implements CLI commands for adding, editing and browsing transactions.

use chrono::NaiveDate;
use clap::Subcommand;

use super::budget::recheck_budget;
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_register, CurrencyFormatter};
use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::{ExpenseCategory, Money, TransactionType, INCOME_CATEGORIES};
use crate::notify::Notifier;
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, DEFAULT_RECENT_COUNT,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Short description, e.g. "Groceries"
        title: String,
        /// Amount (e.g., "50.00" or "1,250")
        amount: String,
        /// Category; required for expenses, defaults to Salary for income
        #[arg(short, long)]
        category: Option<String>,
        /// INCOME or EXPENSE
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, oldest first
    List {
        /// Only income
        #[arg(long, conflicts_with_all = ["expenses", "category"])]
        income: bool,
        /// Only expenses
        #[arg(long)]
        expenses: bool,
        /// Only expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the most recently added transactions
    Recent {
        /// Number of transactions to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT_COUNT)]
        count: usize,
    },

    /// Show one transaction
    Show {
        /// Transaction ID or its short prefix
        id: String,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID or its short prefix
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID or its short prefix
        id: String,
    },

    /// Delete every transaction
    Clear {
        /// Required; there is no undo
        #[arg(long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &mut Settings,
    notifier: &dyn Notifier,
    today: NaiveDate,
    cmd: TransactionCommands,
) -> SmartSaveResult<()> {
    let service = TransactionService::new(storage);
    let formatter = CurrencyFormatter::from_settings(settings);

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            category,
            kind,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => today,
            };
            let category = resolve_category(kind, category.as_deref())?;

            let txn = service.create(CreateTransactionInput {
                title,
                amount,
                category,
                kind,
                date,
            })?;

            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, &formatter));

            recheck_budget(storage, settings, notifier, today)?;
        }

        TransactionCommands::List {
            income,
            expenses,
            category,
        } => {
            let filter = if let Some(name) = category {
                TransactionFilter::ExpenseCategory(parse_expense_category(&name)?)
            } else if income {
                TransactionFilter::IncomeOnly
            } else if expenses {
                TransactionFilter::ExpensesOnly
            } else {
                TransactionFilter::All
            };

            let transactions = service.list(&filter)?;
            print!("{}", format_transaction_register(&transactions, &formatter));
        }

        TransactionCommands::Recent { count } => {
            let transactions = service.recent(count)?;
            print!("{}", format_transaction_register(&transactions, &formatter));
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| SmartSaveError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(&txn, &formatter));
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            category,
            kind,
            date,
        } => {
            let mut txn = service
                .find(&id)?
                .ok_or_else(|| SmartSaveError::transaction_not_found(&id))?;

            if title.is_none()
                && amount.is_none()
                && category.is_none()
                && kind.is_none()
                && date.is_none()
            {
                println!("Nothing to change.");
                return Ok(());
            }

            if let Some(new_title) = title {
                txn.title = new_title.trim().to_string();
            }
            if let Some(new_amount) = amount {
                txn.amount = parse_amount(&new_amount)?;
            }
            if let Some(new_date) = date {
                txn.date = parse_date(&new_date)?;
            }

            // Changing the type re-resolves the category for the new type
            let kind_changed = kind.is_some_and(|k| k != txn.kind);
            if let Some(new_kind) = kind {
                txn.kind = new_kind;
            }
            if category.is_some() || kind_changed {
                txn.category = resolve_category(txn.kind, category.as_deref())?;
            }

            if !service.update(txn.clone())? {
                return Err(SmartSaveError::transaction_not_found(txn.id.as_str()));
            }

            println!("Updated transaction:");
            print!("{}", format_transaction_details(&txn, &formatter));

            recheck_budget(storage, settings, notifier, today)?;
        }

        TransactionCommands::Delete { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| SmartSaveError::transaction_not_found(&id))?;

            service.delete(&txn.id)?;
            println!("Deleted transaction: {} ({})", txn.title, txn.id.short());
        }

        TransactionCommands::Clear { force } => {
            if !force {
                println!("This deletes every transaction. Re-run with --force to confirm.");
                return Ok(());
            }

            let count = service.count()?;
            service.clear()?;
            println!("Deleted {} transactions.", count);
        }
    }

    Ok(())
}

pub(crate) fn parse_amount(s: &str) -> SmartSaveResult<Money> {
    Money::parse(s).map_err(|e| {
        SmartSaveError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '50.00' or '1,250'. Error: {}",
            s, e
        ))
    })
}

fn parse_date(s: &str) -> SmartSaveResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        SmartSaveError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

fn parse_expense_category(name: &str) -> SmartSaveResult<ExpenseCategory> {
    name.parse::<ExpenseCategory>()
        .map_err(|e| SmartSaveError::Validation(e.to_string()))
}

/// Canonical category name for a transaction of `kind`
fn resolve_category(kind: TransactionType, category: Option<&str>) -> SmartSaveResult<String> {
    match (kind, category) {
        (TransactionType::Expense, Some(name)) => {
            Ok(parse_expense_category(name)?.as_str().to_string())
        }
        (TransactionType::Expense, None) => Err(SmartSaveError::Validation(
            "Expenses need a category (see 'smartsave categories')".into(),
        )),
        (TransactionType::Income, Some(name)) => {
            let name = name.trim();
            Ok(INCOME_CATEGORIES
                .iter()
                .find(|c| c.eq_ignore_ascii_case(name))
                .map(|c| c.to_string())
                .unwrap_or_else(|| name.to_string()))
        }
        (TransactionType::Income, None) => Ok(INCOME_CATEGORIES[0].to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_category() {
        assert_eq!(
            resolve_category(TransactionType::Expense, Some("food")).unwrap(),
            "Food"
        );
        assert!(resolve_category(TransactionType::Expense, Some("Snacks")).is_err());
        assert!(resolve_category(TransactionType::Expense, None).is_err());
        assert_eq!(resolve_category(TransactionType::Income, None).unwrap(), "Salary");
        assert_eq!(
            resolve_category(TransactionType::Income, Some("bonus")).unwrap(),
            "Bonus"
        );
        assert_eq!(
            resolve_category(TransactionType::Income, Some("Gift")).unwrap(),
            "Gift"
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-05-03").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 3).unwrap()
        );
        assert!(parse_date("03/05/2025").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,250.5").unwrap(), Money::from_cents(125_050));
        assert!(parse_amount("$5").unwrap_err().is_validation());
        assert!(parse_amount("60,000,000,000,000,000").unwrap_err().is_validation());
    }
}
