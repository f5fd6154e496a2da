//! Budget service
//!
//! Monthly budget ceiling and the one-shot "budget exceeded" alert. The
//! alert state lives in [`Settings::budget_notified`] so it survives between
//! runs: once the alert fires it stays quiet until the ceiling is changed.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::Money;
use crate::notify::{NotificationRequest, Notifier};
use crate::reports;
use crate::storage::Storage;

/// Where the month stands against the ceiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub ceiling: Money,
    pub month_expense: Money,
    /// Ceiling minus month expenses; negative once over budget
    pub remaining: Money,
    /// Share of the ceiling spent, capped at 100
    pub progress_percent: u8,
}

impl BudgetStatus {
    pub fn new(ceiling: Money, month_expense: Money) -> Self {
        let progress_percent = if ceiling.is_positive() {
            month_expense.percent_of(ceiling).clamp(0.0, 100.0) as u8
        } else {
            0
        };

        Self {
            ceiling,
            month_expense,
            remaining: ceiling - month_expense,
            progress_percent,
        }
    }

    pub fn has_ceiling(&self) -> bool {
        self.ceiling.is_positive()
    }

    pub fn is_exceeded(&self) -> bool {
        self.has_ceiling() && self.remaining.is_negative()
    }
}

/// Set a new monthly ceiling and re-arm the alert
pub fn set_ceiling(settings: &mut Settings, ceiling: Money) -> SmartSaveResult<()> {
    if !ceiling.is_positive() {
        return Err(SmartSaveError::Validation(format!(
            "Budget must be greater than zero, got {}",
            ceiling
        )));
    }

    settings.monthly_budget = ceiling;
    settings.budget_notified = false;
    info!(ceiling = %ceiling, "monthly budget set");
    Ok(())
}

/// Advance the alert state for this month's expenses
///
/// Returns the notification to deliver the first time spending goes over a
/// positive ceiling while notifications are enabled. Every later call returns
/// `None` until [`set_ceiling`] re-arms the alert.
pub fn evaluate_threshold(
    settings: &mut Settings,
    month_expense: Money,
) -> Option<NotificationRequest> {
    let status = BudgetStatus::new(settings.monthly_budget, month_expense);
    if !status.is_exceeded() || settings.budget_notified || !settings.notifications_enabled {
        return None;
    }

    settings.budget_notified = true;
    Some(NotificationRequest::budget_exceeded())
}

/// Service for budget status and threshold checks
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Status of the month containing `today`
    pub fn status(&self, settings: &Settings, today: NaiveDate) -> SmartSaveResult<BudgetStatus> {
        let transactions = self.storage.transactions.read_all()?;
        let month_expense = reports::current_month_expense(&transactions, today);
        Ok(BudgetStatus::new(settings.monthly_budget, month_expense))
    }

    /// Evaluate the threshold against stored transactions and deliver any alert
    ///
    /// Returns true when a notification was sent. The caller persists
    /// `settings` afterwards.
    pub fn check_threshold(
        &self,
        settings: &mut Settings,
        today: NaiveDate,
        notifier: &dyn Notifier,
    ) -> SmartSaveResult<bool> {
        let status = self.status(settings, today)?;
        debug!(
            ceiling = %status.ceiling,
            month_expense = %status.month_expense,
            notified = settings.budget_notified,
            "checking budget threshold"
        );

        match evaluate_threshold(settings, status.month_expense) {
            Some(request) => {
                notifier.notify(&request);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
