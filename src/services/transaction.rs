//! Transaction service
//!
//! Validated create/edit/delete on top of the transaction store, plus the
//! history filters and the "recent" list shown on the home screen.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::{ExpenseCategory, Money, Transaction, TransactionId, TransactionType};
use crate::reports;
use crate::storage::Storage;

/// Number of entries on the home screen's recent list
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// History filters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    IncomeOnly,
    ExpensesOnly,
    /// Expenses filed under one category
    ExpenseCategory(ExpenseCategory),
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::IncomeOnly => txn.is_income(),
            Self::ExpensesOnly => txn.is_expense(),
            Self::ExpenseCategory(category) => {
                txn.is_expense() && txn.category == category.as_str()
            }
        }
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub title: String,
    pub amount: Money,
    pub category: String,
    pub kind: TransactionType,
    pub date: NaiveDate,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> SmartSaveResult<Transaction> {
        let txn = Transaction::new(
            input.title.trim(),
            input.amount,
            input.category.trim(),
            input.kind,
            input.date,
        );

        txn.validate()
            .map_err(|e| SmartSaveError::Validation(e.to_string()))?;

        self.storage.transactions.create(txn.clone())?;
        info!(id = %txn.id, kind = %txn.kind, "transaction created");

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: &TransactionId) -> SmartSaveResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full id or by the short prefix shown in listings
    ///
    /// A prefix matching more than one transaction is rejected.
    pub fn find(&self, identifier: &str) -> SmartSaveResult<Option<Transaction>> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Ok(None);
        }

        let all = self.storage.transactions.read_all()?;
        if let Some(txn) = all.iter().find(|t| t.id.as_str() == identifier) {
            return Ok(Some(txn.clone()));
        }

        let mut matches = all.into_iter().filter(|t| t.id.as_str().starts_with(identifier));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(Some(txn)),
            (Some(_), Some(_)) => Err(SmartSaveError::Validation(format!(
                "Transaction id '{}' is ambiguous",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Replace a transaction after validating it
    ///
    /// Returns false when no transaction has that id.
    pub fn update(&self, txn: Transaction) -> SmartSaveResult<bool> {
        txn.validate()
            .map_err(|e| SmartSaveError::Validation(e.to_string()))?;

        let id = txn.id.clone();
        let updated = self.storage.transactions.update(txn)?;
        if updated {
            info!(id = %id, "transaction updated");
        }
        Ok(updated)
    }

    /// Delete every transaction with this id, returning how many were removed
    pub fn delete(&self, id: &TransactionId) -> SmartSaveResult<usize> {
        let removed = self.storage.transactions.delete(id)?;
        if removed > 0 {
            info!(id = %id, removed, "transaction deleted");
        }
        Ok(removed)
    }

    /// Remove all transactions
    pub fn clear(&self) -> SmartSaveResult<()> {
        self.storage.transactions.clear()?;
        info!("all transactions cleared");
        Ok(())
    }

    /// List transactions in store order
    pub fn list(&self, filter: &TransactionFilter) -> SmartSaveResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.read_all()?;
        transactions.retain(|t| filter.matches(t));
        Ok(transactions)
    }

    /// The last `n` transactions added
    pub fn recent(&self, n: usize) -> SmartSaveResult<Vec<Transaction>> {
        let transactions = self.storage.transactions.read_all()?;
        Ok(reports::recent(&transactions, n).to_vec())
    }

    /// Count transactions
    pub fn count(&self) -> SmartSaveResult<usize> {
        self.storage.transactions.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SmartSavePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SmartSavePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn expense(title: &str, cents: i64, category: &str) -> CreateTransactionInput {
        CreateTransactionInput {
            title: title.to_string(),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            kind: TransactionType::Expense,
            date: NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
        }
    }

    fn income(title: &str, cents: i64) -> CreateTransactionInput {
        CreateTransactionInput {
            title: title.to_string(),
            amount: Money::from_cents(cents),
            category: "Salary".to_string(),
            kind: TransactionType::Income,
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.create(expense("  Lunch  ", 1250, "Food")).unwrap();
        assert_eq!(txn.title, "Lunch");
        assert_eq!(service.count().unwrap(), 1);
        assert_eq!(service.get(&txn.id).unwrap(), Some(txn));
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service.create(expense("", 1250, "Food")).unwrap_err();
        assert!(err.is_validation());

        let err = service.create(expense("Lunch", 0, "Food")).unwrap_err();
        assert!(err.is_validation());

        let err = service.create(expense("Lunch", 100, "Snacks")).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_update_and_missing_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut txn = service.create(expense("Lunch", 1250, "Food")).unwrap();
        txn.amount = Money::from_cents(1500);
        assert!(service.update(txn.clone()).unwrap());
        assert_eq!(service.get(&txn.id).unwrap().unwrap().amount.cents(), 1500);

        let stranger = Transaction::new(
            "Ghost",
            Money::from_cents(100),
            "Food",
            TransactionType::Expense,
            txn.date,
        );
        assert!(!service.update(stranger).unwrap());
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let a = service.create(expense("Lunch", 5000, "Food")).unwrap();
        let b = service.create(income("Pay", 3000)).unwrap();

        assert_eq!(service.delete(&a.id).unwrap(), 1);
        assert_eq!(service.delete(&a.id).unwrap(), 0);

        let remaining = service.list(&TransactionFilter::All).unwrap();
        assert_eq!(remaining, vec![b]);
        assert!(reports::total_expense(&remaining).is_zero());
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.create(expense("Lunch", 1000, "Food")).unwrap();
        service.create(income("Pay", 300_000)).unwrap();
        service.create(expense("Bus", 250, "Transport")).unwrap();

        assert_eq!(service.list(&TransactionFilter::All).unwrap().len(), 3);
        assert_eq!(service.list(&TransactionFilter::IncomeOnly).unwrap().len(), 1);
        assert_eq!(service.list(&TransactionFilter::ExpensesOnly).unwrap().len(), 2);

        let food = service
            .list(&TransactionFilter::ExpenseCategory(ExpenseCategory::Food))
            .unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].title, "Lunch");
    }

    #[test]
    fn test_recent_is_insertion_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        for i in 1..=7 {
            service.create(expense(&format!("T{}", i), 100, "Food")).unwrap();
        }

        let recent = service.recent(DEFAULT_RECENT_COUNT).unwrap();
        let titles: Vec<_> = recent.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["T3", "T4", "T5", "T6", "T7"]);
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.create(expense("Lunch", 1000, "Food")).unwrap();
        let found = service.find(txn.id.short()).unwrap();
        assert_eq!(found, Some(txn.clone()));
        assert_eq!(service.find(txn.id.as_str()).unwrap(), Some(txn));
        assert_eq!(service.find("zzzz").unwrap(), None);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.create(expense("Lunch", 1000, "Food")).unwrap();
        service.clear().unwrap();
        assert_eq!(service.count().unwrap(), 0);
    }
}
