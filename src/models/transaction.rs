//! Transaction model
//!
//! A transaction is either income or an expense. Amounts are always positive;
//! the direction lives in [`TransactionType`].

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::ExpenseCategory;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, fixed at creation
    pub id: TransactionId,

    /// Free-text title
    pub title: String,

    /// Positive amount; currency-agnostic
    pub amount: Money,

    /// Category name
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Calendar date, stored on the wire as epoch milliseconds (midnight UTC)
    #[serde(with = "epoch_millis")]
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionType,
        date: NaiveDate,
    ) -> Self {
        Self::with_id(TransactionId::new(), title, amount, category, kind, date)
    }

    /// Create a transaction with a caller-supplied id
    pub fn with_id(
        id: TransactionId,
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionType,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            amount,
            category: category.into(),
            kind,
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Whether the transaction falls in the same calendar month and year as `day`
    pub fn in_month_of(&self, day: NaiveDate) -> bool {
        self.date.year() == day.year() && self.date.month() == day.month()
    }

    /// The fixed expense category, if the category name is one
    pub fn expense_category(&self) -> Option<ExpenseCategory> {
        ExpenseCategory::from_name(&self.category)
    }

    /// Validate user-entered fields
    ///
    /// The store itself never calls this; the add and edit flows do.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Money::MAX {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        match self.kind {
            TransactionType::Expense if self.expense_category().is_none() => Err(
                TransactionValidationError::UnknownExpenseCategory(self.category.clone()),
            ),
            TransactionType::Income if self.category.trim().is_empty() => {
                Err(TransactionValidationError::EmptyCategory)
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.kind,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    UnknownExpenseCategory(String),
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title must not be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} is above the maximum of {}", amount, Money::MAX)
            }
            Self::UnknownExpenseCategory(name) => {
                let names: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
                write!(
                    f,
                    "'{}' is not an expense category (expected one of: {})",
                    name,
                    names.join(", ")
                )
            }
            Self::EmptyCategory => write!(f, "Category must not be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// Serde adapter: `NaiveDate` <-> epoch milliseconds at midnight UTC
///
/// Decoding keeps the UTC calendar day of the instant, whatever the time of
/// day. A value written just after local midnight east of UTC therefore reads
/// back as the previous day (and, on the 1st, the previous month).
pub mod epoch_millis {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn to_millis(date: &NaiveDate) -> i64 {
        date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    pub fn from_millis(millis: i64) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(to_millis(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        from_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("date out of range: {}", millis)))
    }
}
