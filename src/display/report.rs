//! Report formatting for terminal output
//!
//! Home-screen summary, the per-category breakdown and the budget bar.

use super::currency::CurrencyFormatter;
use crate::reports::{CategoryTotal, Summary};
use crate::services::BudgetStatus;

const BAR_WIDTH: usize = 20;
const RULE_WIDTH: usize = 40;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Income, expense and savings totals
pub fn format_summary(summary: &Summary, formatter: &CurrencyFormatter) -> String {
    let mut output = String::new();

    output.push_str("SmartSave Summary\n");
    output.push_str(&separator(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<20}{:>20}\n",
        "Total income",
        formatter.format(summary.total_income)
    ));
    output.push_str(&format!(
        "{:<20}{:>20}\n",
        "Total expenses",
        formatter.format(summary.total_expense)
    ));
    output.push_str(&format!(
        "{:<20}{:>20}\n",
        "Savings",
        formatter.format(summary.savings)
    ));
    output.push_str(&format!(
        "{:<20}{:>20}\n",
        "This month",
        formatter.format(summary.month_expense)
    ));
    output.push_str(&separator(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!("{} transactions\n", summary.transaction_count));

    output
}

/// Expense totals per category with their share of all spending
pub fn format_category_breakdown(rows: &[CategoryTotal], formatter: &CurrencyFormatter) -> String {
    let mut output = String::new();

    output.push_str("Expenses by Category\n");
    output.push_str(&separator(RULE_WIDTH + BAR_WIDTH));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<15}{:>14} {:>6}  {}\n",
            row.category,
            formatter.format(row.total),
            format_percentage(row.percentage),
            format_bar(row.percentage, 100.0, BAR_WIDTH)
        ));
    }

    output
}

/// Monthly budget progress
pub fn format_budget_status(status: &BudgetStatus, formatter: &CurrencyFormatter) -> String {
    if !status.has_ceiling() {
        return "No monthly budget set. Use 'smartsave budget set <AMOUNT>'.\n".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!("Monthly budget:  {}\n", formatter.format(status.ceiling)));
    output.push_str(&format!(
        "Spent this month: {}\n",
        formatter.format(status.month_expense)
    ));
    if status.is_exceeded() {
        output.push_str(&format!(
            "Over budget by:  {}\n",
            formatter.format(-status.remaining)
        ));
    } else {
        output.push_str(&format!(
            "Remaining:       {}\n",
            formatter.format(status.remaining)
        ));
    }
    output.push_str(&format!(
        "[{}] {}%\n",
        format_bar(status.progress_percent as f64, 100.0, BAR_WIDTH),
        status.progress_percent
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(55.6), "56%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
    }

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            total_income: Money::from_cents(300_000),
            total_expense: Money::from_cents(125_050),
            savings: Money::from_cents(174_950),
            month_expense: Money::from_cents(20_000),
            transaction_count: 4,
        };

        let output = format_summary(&summary, &CurrencyFormatter::default());
        assert!(output.contains("$3,000.00"));
        assert!(output.contains("$1,250.50"));
        assert!(output.contains("$1,749.50"));
        assert!(output.contains("4 transactions"));
    }

    #[test]
    fn test_format_category_breakdown() {
        let rows = vec![
            CategoryTotal {
                category: "Food".into(),
                total: Money::from_cents(7_500),
                percentage: 75.0,
            },
            CategoryTotal {
                category: "Bills".into(),
                total: Money::zero(),
                percentage: 0.0,
            },
        ];

        let output = format_category_breakdown(&rows, &CurrencyFormatter::new("EUR (€)"));
        assert!(output.contains("Food"));
        assert!(output.contains("€75.00"));
        assert!(output.contains("75%"));
        assert!(output.contains("Bills"));
    }

    #[test]
    fn test_format_budget_status() {
        let formatter = CurrencyFormatter::default();

        let unset = BudgetStatus::new(Money::zero(), Money::from_cents(100));
        assert!(format_budget_status(&unset, &formatter).contains("No monthly budget set"));

        let under = BudgetStatus::new(Money::from_cents(100_000), Money::from_cents(40_000));
        let output = format_budget_status(&under, &formatter);
        assert!(output.contains("Remaining:       $600.00"));
        assert!(output.contains("40%"));

        let over = BudgetStatus::new(Money::from_cents(100_000), Money::from_cents(120_000));
        let output = format_budget_status(&over, &formatter);
        assert!(output.contains("Over budget by:  $200.00"));
        assert!(output.contains("100%"));
    }
}
