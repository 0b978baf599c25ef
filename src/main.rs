use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{handle_expense_command, ExpenseCommands, Shell};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::services::Ledger;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal expense ledger",
    long_about = "Records dated expenses in a local SQLite database and reports \
                  totals and the balance left from your income."
)]
struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Launch the interactive menu
    #[command(alias = "menu")]
    Shell,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn".to_string())
                .as_str(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let db_file = settings.database_file(&paths, cli.db);

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut ledger = Ledger::open(&db_file)?;
            handle_expense_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Shell) => {
            let mut ledger = Ledger::open(&db_file)?;
            let stdin = io::stdin();
            Shell::new(&mut ledger, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Database file:  {}", db_file.display());
            println!();
            println!("Settings:");
            println!("  Date format:     {}", settings.date_format);
            println!("  Currency symbol: {:?}", settings.currency_symbol);
        }
        None => {
            println!("Expense Ledger - track expenses against your income");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger shell' to launch the interactive menu.");
        }
    }

    Ok(())
}
