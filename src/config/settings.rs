//! User preferences for SmartSave
//!
//! Flat, persisted settings shared by every command: currency choice, the
//! monthly budget ceiling, notification toggles, the daily reminder time and
//! the PIN lock. Keys keep the names the mobile app used, so a preferences
//! file can be read by either.

use serde::{Deserialize, Serialize};

use super::paths::SmartSavePaths;
use crate::error::SmartSaveError;
use crate::models::Money;
use crate::notify::ReminderTime;
use crate::storage::write_json_atomic;

/// Currency descriptor used when none has been chosen
pub const DEFAULT_CURRENCY_TYPE: &str = "USD ($)";

/// User settings for SmartSave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Currency descriptor, e.g. "EUR (€)"
    #[serde(default = "default_currency_type")]
    pub currency_type: String,

    /// Monthly spending ceiling; zero means no budget is set
    #[serde(default)]
    pub monthly_budget: Money,

    /// Whether the "budget exceeded" notification has fired for the current ceiling
    #[serde(default)]
    pub budget_notified: bool,

    /// Budget notifications toggle
    #[serde(default)]
    pub notifications_enabled: bool,

    /// Daily expense reminder toggle
    #[serde(default)]
    pub expense_reminder_enabled: bool,

    /// Time of day for the expense reminder
    #[serde(
        default,
        deserialize_with = "crate::notify::reminder::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub expense_reminder_time: Option<ReminderTime>,

    /// Whether the app is locked behind a PIN
    #[serde(default, rename = "is_pin_set")]
    pub pin_set: bool,

    /// Argon2 hash of the PIN
    #[serde(default, rename = "app_pin", skip_serializing_if = "Option::is_none")]
    pub app_pin: Option<String>,
}

fn default_currency_type() -> String {
    DEFAULT_CURRENCY_TYPE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_type: default_currency_type(),
            monthly_budget: Money::zero(),
            budget_notified: false,
            notifications_enabled: false,
            expense_reminder_enabled: false,
            expense_reminder_time: None,
            pin_set: false,
            app_pin: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SmartSavePaths) -> Result<Self, SmartSaveError> {
        let settings_path = paths.preferences_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SmartSaveError::Io(format!("Failed to read preferences file: {}", e)))?;

        serde_json::from_str(&contents).map_err(|e| {
            SmartSaveError::Config(format!("Failed to parse preferences file: {}", e))
        })
    }

    /// Save settings to disk, replacing the preferences file atomically
    pub fn save(&self, paths: &SmartSavePaths) -> Result<(), SmartSaveError> {
        let path = paths.preferences_file();
        write_json_atomic(&path, self)?;

        tracing::debug!(path = %path.display(), "preferences saved");
        Ok(())
    }

    /// Whether a monthly budget ceiling has been set
    pub fn has_budget(&self) -> bool {
        self.monthly_budget.is_positive()
    }
}
