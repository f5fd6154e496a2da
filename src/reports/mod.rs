//! Reports for SmartSave
//!
//! Derived figures shown on the home, analysis and budget screens.

pub mod summary;

pub use summary::{
    current_month_expense, expense_by_category, recent, savings, total_expense, total_income,
    CategoryTotal, Summary,
};
