//! Transaction display formatting
//!
//! Register tables and detail views for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::currency::CurrencyFormatter;
use crate::models::{Transaction, TransactionType};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, formatter: &CurrencyFormatter) -> Self {
        let sign = match txn.kind {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        };
        Self {
            id: txn.id.short().to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            title: truncate(&txn.title, 28),
            category: txn.category.clone(),
            amount: format!("{}{}", sign, formatter.format(txn.amount)),
        }
    }
}

/// Format a list of transactions as a table, in the order given
pub fn format_transaction_register(
    transactions: &[Transaction],
    formatter: &CurrencyFormatter,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, formatter))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, formatter: &CurrencyFormatter) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", formatter.format(txn.amount)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));

    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::with_id(
            TransactionId::from("550e8400-e29b-41d4-a716-446655440000"),
            "Weekly groceries",
            Money::from_cents(123_450),
            "Food",
            TransactionType::Expense,
            NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
        )
    }

    #[test]
    fn test_empty_register() {
        let output = format_transaction_register(&[], &CurrencyFormatter::default());
        assert_eq!(output, "No transactions found.\n");
    }

    #[test]
    fn test_register_contains_row_values() {
        let output = format_transaction_register(&[sample()], &CurrencyFormatter::new("EUR (€)"));
        assert!(output.contains("550e8400"));
        assert!(output.contains("2025-05-03"));
        assert!(output.contains("Weekly groceries"));
        assert!(output.contains("-€1,234.50"));
    }

    #[test]
    fn test_details() {
        let output = format_transaction_details(&sample(), &CurrencyFormatter::default());
        assert!(output.contains("Amount:      $1,234.50"));
        assert!(output.contains("Type:        Expense"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title indeed", 10), "a very lo…");
    }
}
