use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::warn;

use allowance_cli::cli::{
    handle_balance_command, handle_category_command, handle_cycle_command,
    handle_transaction_command, handle_user_command, parse_date, CategoryCommands,
    TransactionCommands, UserCommands,
};
use allowance_cli::config::{paths::AllowancePaths, settings::Settings};
use allowance_cli::logging::init_tracing;
use allowance_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "allowance",
    author = "Kaylee Beyene",
    version,
    about = "Track income and expenses against a weekly or monthly cycle",
    long_about = "allowance records income and expenses per user and reports the \
                  running balance of the current weekly or monthly cycle, with \
                  spending broken down by category."
)]
struct Cli {
    /// User to act as
    #[arg(short, long, global = true, env = "ALLOWANCE_USER")]
    user: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, default settings and categories
    Init,

    /// Show current configuration and paths
    Config,

    /// User management commands
    #[command(subcommand)]
    User(UserCommands),

    /// Transaction commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Show the balance of the current cycle
    Balance {
        /// Print the summary as JSON, amounts in integer cents
        #[arg(long)]
        json: bool,
    },

    /// Show the current cycle boundaries
    Cycle,

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AllowancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let today: NaiveDate = match cli.as_of.as_deref() {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let mut storage = Storage::new(paths.clone())?;
    storage
        .load_all()
        .with_context(|| format!("Failed to load data from {}", paths.data_dir().display()))?;

    if !storage.is_initialized() && !matches!(cli.command, None | Some(Commands::Init)) {
        warn!(
            path = %paths.base_dir().display(),
            "data directory not initialized; run 'allowance init'"
        );
    }

    let user = cli.user.as_deref();

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing allowance at: {}", paths.base_dir().display());
            allowance_cli::storage::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories written to {}", paths.categories_file().display());
            println!("Run 'allowance user register <name>' to get started.");
        }
        Some(Commands::Config) => {
            println!("allowance configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default cycle:   {}", settings.default_recurrence.as_str().to_lowercase());
            println!(
                "  Default user:    {}",
                settings.default_user.as_deref().unwrap_or("(none)")
            );
            println!("  Currency:        {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Txn(cmd)) => {
            handle_transaction_command(&storage, &settings, user, today, cmd)?;
        }
        Some(Commands::Balance { json }) => {
            handle_balance_command(&storage, &settings, user, today, json)?;
        }
        Some(Commands::Cycle) => {
            handle_cycle_command(&storage, &settings, user, today)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        None => {
            println!("allowance - income and expense tracker");
            println!();
            println!("Run 'allowance --help' for usage information.");
        }
    }

    Ok(())
}
