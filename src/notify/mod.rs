//! Notification requests
//!
//! The core never talks to an OS notification service. It builds a
//! [`NotificationRequest`] and hands it to whatever [`Notifier`] the host
//! provides. Delivery is fire-and-forget.

pub mod reminder;

pub use reminder::ReminderTime;

/// Channel for budget threshold alerts
pub const BUDGET_CHANNEL: &str = "BUDGET_CHANNEL_ID";

/// Channel for the daily expense reminder
pub const EXPENSE_REMINDER_CHANNEL: &str = "expense_reminder_channel";

/// A notification to show, independent of how it is delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub channel: &'static str,
    pub title: String,
    pub body: String,
    /// Requests with the same channel and id replace one another
    pub dedup_id: u32,
}

impl NotificationRequest {
    pub fn budget_exceeded() -> Self {
        Self {
            channel: BUDGET_CHANNEL,
            title: "Budget Exceeded".to_string(),
            body: "Your expenses have exceeded your monthly budget!".to_string(),
            dedup_id: 1,
        }
    }

    pub fn expense_reminder() -> Self {
        Self {
            channel: EXPENSE_REMINDER_CHANNEL,
            title: "SmartSave: Add Today's Expenses".to_string(),
            body: "Don't forget to log your expenses for today!".to_string(),
            dedup_id: 1,
        }
    }
}

/// Something that can deliver notification requests
pub trait Notifier {
    fn notify(&self, request: &NotificationRequest);
}

/// Delivers notifications as log events and on stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, request: &NotificationRequest) {
        tracing::info!(
            channel = request.channel,
            dedup_id = request.dedup_id,
            title = %request.title,
            "notification"
        );
        eprintln!("[{}] {}", request.title, request.body);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Collects requests instead of delivering them
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub sent: RefCell<Vec<NotificationRequest>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, request: &NotificationRequest) {
            self.sent.borrow_mut().push(request.clone());
        }
    }
}
