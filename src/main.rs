use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use smartsave::cli::{
    handle_budget_command, handle_currency_command, handle_export, handle_import,
    handle_notifications_command, handle_pin_command, handle_reminder_command,
    handle_report_command, handle_transaction_command, BudgetCommands, CurrencyCommands,
    PinCommands, ReminderCommands, ReportCommands, Toggle, TransactionCommands,
};
use smartsave::config::{paths::SmartSavePaths, settings::Settings};
use smartsave::display::extract_symbol;
use smartsave::notify::LogNotifier;
use smartsave::storage::Storage;

#[derive(Parser)]
#[command(
    name = "smartsave",
    version,
    about = "Track income and expenses against a monthly budget",
    long_about = "SmartSave records income and expenses, summarises where the money \
                  goes, warns once when a month's spending passes your budget, and \
                  backs everything up to a single JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show or change the display currency
    Currency {
        #[command(subcommand)]
        cmd: Option<CurrencyCommands>,
    },

    /// Turn budget notifications on or off
    Notifications {
        #[arg(value_enum)]
        state: Option<Toggle>,
    },

    /// Daily expense reminder
    #[command(subcommand)]
    Reminder(ReminderCommands),

    /// PIN lock
    #[command(subcommand)]
    Pin(PinCommands),

    /// Export all transactions to the backup file
    Export,

    /// Replace all transactions with the backup file's contents
    Import,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    smartsave::init_tracing();

    let cli = Cli::parse();

    let paths = SmartSavePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    let notifier = LogNotifier;
    let now = Local::now().naive_local();
    let today = now.date();

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &mut settings, &notifier, today, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &mut settings, &notifier, today, cmd)?;
        }
        Some(Commands::Currency { cmd }) => {
            handle_currency_command(
                &paths,
                &mut settings,
                cmd.unwrap_or(CurrencyCommands::Show),
            )?;
        }
        Some(Commands::Notifications { state }) => {
            handle_notifications_command(&paths, &mut settings, state)?;
        }
        Some(Commands::Reminder(cmd)) => {
            handle_reminder_command(&paths, &mut settings, &notifier, now, cmd)?;
        }
        Some(Commands::Pin(cmd)) => {
            handle_pin_command(&paths, &mut settings, cmd)?;
        }
        Some(Commands::Export) => handle_export(&storage)?,
        Some(Commands::Import) => {
            handle_import(&storage, &mut settings, &notifier, today)?;
        }
        Some(Commands::Config) => {
            println!("SmartSave Configuration");
            println!("=======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Backup file:       {}", paths.backup_file().display());
            println!("Preferences file:  {}", paths.preferences_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Currency:        {} ({})",
                settings.currency_type,
                extract_symbol(&settings.currency_type)
            );
            if settings.has_budget() {
                println!("  Monthly budget:  {}", settings.monthly_budget);
            } else {
                println!("  Monthly budget:  not set");
            }
            println!("  Notifications:   {}", on_off(settings.notifications_enabled));
            match settings.expense_reminder_time {
                Some(time) if settings.expense_reminder_enabled => {
                    println!("  Daily reminder:  {}", time)
                }
                _ => println!("  Daily reminder:  off"),
            }
            println!("  PIN lock:        {}", on_off(settings.pin_set));
        }
        None => {
            println!("SmartSave - personal finance tracker");
            println!();
            println!("Run 'smartsave --help' for usage information.");
        }
    }

    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
