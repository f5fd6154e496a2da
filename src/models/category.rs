//! Transaction categories
//!
//! Expenses must use one of the fixed [`ExpenseCategory`] values. Income
//! transactions may carry any category name; `Salary` and `Bonus` are the
//! ones offered by default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Income categories offered by default
pub const INCOME_CATEGORIES: [&str; 2] = ["Salary", "Bonus"];

/// The fixed set of expense categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Bills,
    Health,
    Utility,
    Shopping,
    Transport,
    Entertainment,
}

impl ExpenseCategory {
    /// All expense categories in display order
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Food,
        Self::Bills,
        Self::Health,
        Self::Utility,
        Self::Shopping,
        Self::Transport,
        Self::Entertainment,
    ];

    /// The name stored in a transaction's `category` field
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Bills => "Bills",
            Self::Health => "Health",
            Self::Utility => "Utility",
            Self::Shopping => "Shopping",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
        }
    }

    /// Look up a category by its stored name (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown expense category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
        write!(
            f,
            "Unknown expense category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    /// Case-insensitive parse, for user input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let names: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            ["Food", "Bills", "Health", "Utility", "Shopping", "Transport", "Entertainment"]
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!(
            " TRANSPORT ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Transport
        );
        assert!("Salary".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(ExpenseCategory::from_name("Bills"), Some(ExpenseCategory::Bills));
        assert_eq!(ExpenseCategory::from_name("bills"), None);
    }
}
