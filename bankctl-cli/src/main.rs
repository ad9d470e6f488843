//! bankctl CLI - bank account management over a Postgres store
//!
//! This is the main entry point for the bankctl command-line tool, which
//! provides:
//! - User registration and login backed by argon2-hashed credentials
//! - Account creation and listing (`account` subcommand)
//! - Deposit / withdraw / balance operations against the account ledger
//! - An HTTP API exposing the same operations (`serve` subcommand)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "bankctl",
    author,
    version,
    about = "Manage bank accounts: register, log in, deposit, withdraw, check balances",
    long_about = "Bank account manager backed by PostgreSQL. Credentials are stored as \
                  salted argon2 hashes; balances are fixed-point decimals with two \
                  decimal places. Configuration comes from BANKCTL_* environment \
                  variables or DATABASE_URL."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a new user (email + password)
    Register(commands::auth::RegisterArgs),
    /// Verify credentials for an existing user
    Login(commands::auth::LoginArgs),
    /// Account management (create, list)
    Account(commands::account::AccountArgs),
    /// Deposit money into an account
    Deposit(commands::account::TransactArgs),
    /// Withdraw money from an account
    Withdraw(commands::account::TransactArgs),
    /// Check an account's balance
    Balance(commands::account::BalanceArgs),
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Register(args) => commands::run_register(args).await?,
        Commands::Login(args) => commands::run_login(args).await?,
        Commands::Account(args) => commands::run_account(args).await?,
        Commands::Deposit(args) => commands::run_deposit(args).await?,
        Commands::Withdraw(args) => commands::run_withdraw(args).await?,
        Commands::Balance(args) => commands::run_balance(args).await?,
        Commands::Serve(args) => commands::run_serve(args).await?,
    }

    Ok(())
}
