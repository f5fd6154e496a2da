//! Preference CLI commands
//!
//! Currency, notification toggles, the daily reminder and the PIN lock.

use chrono::NaiveDateTime;
use clap::{Subcommand, ValueEnum};

use crate::config::paths::SmartSavePaths;
use crate::config::Settings;
use crate::display::extract_symbol;
use crate::error::{SmartSaveError, SmartSaveResult};
use crate::notify::{NotificationRequest, Notifier, ReminderTime};
use crate::security;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the current currency
    Show,

    /// Choose the currency, e.g. "EUR (€)"
    Set {
        /// Descriptor in the form "CODE (SYMBOL)"
        descriptor: String,
    },
}

/// On/off switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// Daily reminder subcommands
#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Turn the reminder on at a time of day (HH:MM)
    Set {
        time: ReminderTime,
    },

    /// Turn the reminder off
    Off,

    /// Show the reminder setting and when it next fires
    Status,

    /// Deliver the reminder now, if enabled; meant for cron or a timer
    Fire,
}

/// PIN lock subcommands
#[derive(Subcommand)]
pub enum PinCommands {
    /// Set or change the 4-digit PIN
    Set {
        /// PIN to set; prompted for when omitted
        #[arg(long)]
        pin: Option<String>,
    },

    /// Remove the PIN
    Disable,

    /// Check a PIN
    Verify {
        /// PIN to check; prompted for when omitted
        #[arg(long)]
        pin: Option<String>,
    },
}

/// Handle a currency command
pub fn handle_currency_command(
    paths: &SmartSavePaths,
    settings: &mut Settings,
    cmd: CurrencyCommands,
) -> SmartSaveResult<()> {
    match cmd {
        CurrencyCommands::Show => {
            println!(
                "Currency: {} (symbol {})",
                settings.currency_type,
                extract_symbol(&settings.currency_type)
            );
        }

        CurrencyCommands::Set { descriptor } => {
            let descriptor = descriptor.trim().to_string();
            if descriptor.is_empty() {
                return Err(SmartSaveError::Validation(
                    "Currency cannot be empty".into(),
                ));
            }

            println!(
                "Currency set to {} (symbol {})",
                descriptor,
                extract_symbol(&descriptor)
            );
            settings.currency_type = descriptor;
            settings.save(paths)?;
        }
    }

    Ok(())
}

/// Handle a notifications toggle; with no state, shows the current one
pub fn handle_notifications_command(
    paths: &SmartSavePaths,
    settings: &mut Settings,
    state: Option<Toggle>,
) -> SmartSaveResult<()> {
    if let Some(state) = state {
        settings.notifications_enabled = state == Toggle::On;
        settings.save(paths)?;
    }

    println!(
        "Budget notifications: {}",
        if settings.notifications_enabled { "on" } else { "off" }
    );
    Ok(())
}

/// Handle a reminder command
pub fn handle_reminder_command(
    paths: &SmartSavePaths,
    settings: &mut Settings,
    notifier: &dyn Notifier,
    now: NaiveDateTime,
    cmd: ReminderCommands,
) -> SmartSaveResult<()> {
    match cmd {
        ReminderCommands::Set { time } => {
            settings.expense_reminder_enabled = true;
            settings.expense_reminder_time = Some(time);
            settings.save(paths)?;

            println!("Daily reminder set for {}", time);
            println!("Next reminder: {}", time.next_fire(now).format("%Y-%m-%d %H:%M"));
        }

        ReminderCommands::Off => {
            settings.expense_reminder_enabled = false;
            settings.save(paths)?;
            println!("Daily reminder turned off");
        }

        ReminderCommands::Status => match settings.expense_reminder_time {
            Some(time) if settings.expense_reminder_enabled => {
                println!("Daily reminder: on at {}", time);
                println!("Next reminder: {}", time.next_fire(now).format("%Y-%m-%d %H:%M"));
            }
            _ => println!("Daily reminder: off"),
        },

        ReminderCommands::Fire => {
            if settings.expense_reminder_enabled {
                notifier.notify(&NotificationRequest::expense_reminder());
            } else {
                tracing::debug!("expense reminder disabled, not firing");
            }
        }
    }

    Ok(())
}

/// Handle a PIN command
pub fn handle_pin_command(
    paths: &SmartSavePaths,
    settings: &mut Settings,
    cmd: PinCommands,
) -> SmartSaveResult<()> {
    match cmd {
        PinCommands::Set { pin } => {
            let pin = match pin {
                Some(pin) => pin,
                None => {
                    let first = rpassword::prompt_password("New PIN: ")?;
                    let second = rpassword::prompt_password("Confirm PIN: ")?;
                    if first != second {
                        return Err(SmartSaveError::Validation("PINs do not match".into()));
                    }
                    first
                }
            };

            security::set_pin(settings, pin.trim())?;
            settings.save(paths)?;
            println!("PIN set");
        }

        PinCommands::Disable => {
            security::disable_pin(settings);
            settings.save(paths)?;
            println!("PIN disabled");
        }

        PinCommands::Verify { pin } => {
            let pin = match pin {
                Some(pin) => pin,
                None => rpassword::prompt_password("PIN: ")?,
            };

            if security::verify_pin(settings, pin.trim())? {
                println!("PIN accepted");
            } else {
                return Err(SmartSaveError::Validation("Incorrect PIN".into()));
            }
        }
    }

    Ok(())
}
