//! Aggregation queries
//!
//! Pure functions over the full transaction list. Nothing is cached; callers
//! read the store and recompute on every view.

use chrono::NaiveDate;

use crate::models::{ExpenseCategory, Money, Transaction};

/// Sum of all income amounts
pub fn total_income(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Sum of all expense amounts
pub fn total_expense(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// Income minus expense; negative when spending exceeds income
pub fn savings(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expense(transactions)
}

/// Expenses dated in the same calendar month and year as `today`
pub fn current_month_expense(transactions: &[Transaction], today: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month_of(today))
        .map(|t| t.amount)
        .sum()
}

/// The last `n` transactions in store order, oldest of them first
///
/// Recency means "most recently inserted", not "latest date".
pub fn recent(transactions: &[Transaction], n: usize) -> &[Transaction] {
    let start = transactions.len().saturating_sub(n);
    &transactions[start..]
}

/// One row of the per-category expense breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Share of all expenses, 0-100
    pub percentage: f64,
}

/// Expense total per category
///
/// Every fixed expense category is listed, in display order, even with no
/// activity. Expenses filed under any other name (e.g. from an imported
/// backup) follow in first-seen order, so the rows always add up to
/// [`total_expense`].
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut rows: Vec<(String, Money)> = ExpenseCategory::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), Money::zero()))
        .collect();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match rows.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, total)) => *total += txn.amount,
            None => rows.push((txn.category.clone(), txn.amount)),
        }
    }

    let grand_total: Money = rows.iter().map(|(_, total)| *total).sum();

    rows.into_iter()
        .map(|(category, total)| CategoryTotal {
            percentage: total.percent_of(grand_total),
            category,
            total,
        })
        .collect()
}

/// Headline numbers for the home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    pub savings: Money,
    pub month_expense: Money,
    pub transaction_count: usize,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction], today: NaiveDate) -> Self {
        let total_income = total_income(transactions);
        let total_expense = total_expense(transactions);
        Self {
            total_income,
            total_expense,
            savings: total_income - total_expense,
            month_expense: current_month_expense(transactions, today),
            transaction_count: transactions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionId, TransactionType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(
        id: &str,
        cents: i64,
        kind: TransactionType,
        category: &str,
        on: NaiveDate,
    ) -> Transaction {
        Transaction::with_id(
            TransactionId::from(id),
            id,
            Money::from_cents(cents),
            category,
            kind,
            on,
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("1", 5000, TransactionType::Expense, "Food", date(2025, 5, 3)),
            txn("2", 300_000, TransactionType::Income, "Salary", date(2025, 5, 1)),
            txn("3", 12_050, TransactionType::Expense, "Bills", date(2025, 4, 28)),
            txn("4", 2_575, TransactionType::Expense, "Food", date(2025, 5, 20)),
            txn("5", 50_000, TransactionType::Income, "Bonus", date(2024, 12, 24)),
            txn("6", 9_999, TransactionType::Expense, "Transport", date(2024, 5, 10)),
        ]
    }

    #[test]
    fn test_totals() {
        let txns = sample();
        assert_eq!(total_income(&txns).cents(), 350_000);
        assert_eq!(total_expense(&txns).cents(), 5000 + 12_050 + 2_575 + 9_999);
        assert_eq!(savings(&txns), total_income(&txns) - total_expense(&txns));
    }

    #[test]
    fn test_savings_can_be_negative() {
        let txns = vec![
            txn("1", 1000, TransactionType::Income, "Salary", date(2025, 1, 1)),
            txn("2", 2500, TransactionType::Expense, "Food", date(2025, 1, 2)),
        ];
        assert_eq!(savings(&txns).cents(), -1500);
    }

    #[test]
    fn test_empty_list() {
        let summary = Summary::from_transactions(&[], date(2025, 5, 1));
        assert!(summary.total_income.is_zero());
        assert!(summary.savings.is_zero());
        assert_eq!(summary.transaction_count, 0);
        assert!(recent(&[], 5).is_empty());
    }

    #[test]
    fn test_current_month_expense_matches_month_and_year() {
        let txns = sample();
        // May 2025 expenses: 5000 + 2575; May 2024 and April 2025 excluded
        assert_eq!(current_month_expense(&txns, date(2025, 5, 31)).cents(), 7_575);
        assert_eq!(current_month_expense(&txns, date(2025, 4, 1)).cents(), 12_050);
        assert!(current_month_expense(&txns, date(2025, 6, 1)).is_zero());
    }

    #[test]
    fn test_expense_by_category_lists_every_fixed_category() {
        let rows = expense_by_category(&sample());
        let names: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            names,
            ["Food", "Bills", "Health", "Utility", "Shopping", "Transport", "Entertainment"]
        );

        assert_eq!(rows[0].total.cents(), 7_575);
        assert_eq!(rows[1].total.cents(), 12_050);
        assert!(rows[2].total.is_zero());
        assert_eq!(rows[2].percentage, 0.0);
        assert_eq!(rows[5].total.cents(), 9_999);
    }

    #[test]
    fn test_category_rows_sum_to_total_expense() {
        let mut txns = sample();
        txns.push(txn("7", 4_200, TransactionType::Expense, "Pets", date(2025, 5, 2)));

        let rows = expense_by_category(&txns);
        assert_eq!(rows.last().unwrap().category, "Pets");

        let sum: Money = rows.iter().map(|r| r.total).sum();
        assert_eq!(sum, total_expense(&txns));

        let pct: f64 = rows.iter().map(|r| r.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let huge = i64::MAX / 2 + 1;
        let txns = vec![
            txn("1", huge, TransactionType::Expense, "Food", date(2025, 5, 3)),
            txn("2", huge, TransactionType::Expense, "Food", date(2025, 5, 4)),
        ];

        assert_eq!(total_expense(&txns).cents(), i64::MAX);
        assert_eq!(current_month_expense(&txns, date(2025, 5, 1)).cents(), i64::MAX);
        assert_eq!(savings(&txns).cents(), -i64::MAX);
        assert_eq!(expense_by_category(&txns)[0].total.cents(), i64::MAX);

        let summary = Summary::from_transactions(&txns, date(2025, 5, 1));
        assert_eq!(summary.total_expense.cents(), i64::MAX);
    }

    #[test]
    fn test_recent_is_by_insertion_not_date() {
        let txns = sample();
        let last_two: Vec<&str> = recent(&txns, 2).iter().map(|t| t.id.as_str()).collect();
        // "6" is dated 2024 but was inserted last
        assert_eq!(last_two, ["5", "6"]);
        assert_eq!(recent(&txns, 50).len(), txns.len());
    }

    #[test]
    fn test_delete_scenario_totals() {
        let mut txns = vec![
            txn("1", 5000, TransactionType::Expense, "Food", date(2025, 5, 3)),
            txn("2", 3000, TransactionType::Income, "Salary", date(2025, 5, 3)),
        ];
        txns.retain(|t| t.id.as_str() != "1");
        assert!(total_expense(&txns).is_zero());
        assert_eq!(total_income(&txns).cents(), 3000);
    }
}
