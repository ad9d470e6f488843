//! Account commands - create, list, deposit, withdraw, balance.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use bankctl_core::{non_empty, Amount, TransactionKind};
use bankctl_server::db::AccountRepo;

use super::open_pool;

/// Arguments for the account command
#[derive(Parser, Debug)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Create a new account with an opening balance
    Create(CreateArgs),
    /// List all accounts
    List,
}

/// Arguments for account create
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Account holder name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Opening balance (must be greater than zero)
    pub opening_balance: Decimal,
}

/// Arguments for deposit and withdraw
#[derive(Parser, Debug)]
pub struct TransactArgs {
    /// Account ID
    pub account_id: i64,

    /// Amount (must be greater than zero, at most 2 decimal places)
    pub amount: Decimal,
}

/// Arguments for the balance command
#[derive(Parser, Debug)]
pub struct BalanceArgs {
    /// Account ID
    pub account_id: i64,
}

/// Dispatch account subcommands.
pub async fn run_account(args: AccountArgs) -> Result<()> {
    match args.command {
        AccountCommand::Create(args) => run_create(args).await,
        AccountCommand::List => run_list().await,
    }
}

async fn run_create(args: CreateArgs) -> Result<()> {
    let name = non_empty("name", &args.name)?;
    let email = non_empty("email", &args.email)?;
    let opening_balance = Amount::new(args.opening_balance)?;

    let pool = open_pool().await?;
    let account_id = AccountRepo::new(&pool)
        .create(&name, &email, opening_balance)
        .await?;

    println!("Account created successfully! ID: {account_id}");
    Ok(())
}

async fn run_list() -> Result<()> {
    let pool = open_pool().await?;
    let accounts = AccountRepo::new(&pool).list().await?;

    if accounts.is_empty() {
        println!("No accounts found.");
        return Ok(());
    }

    println!("{:>6}  {:<24} {:<28} {:>14}", "ID", "NAME", "EMAIL", "BALANCE");
    for account in accounts {
        println!(
            "{:>6}  {:<24} {:<28} {:>14}",
            account.id,
            account.name,
            account.email,
            account.balance.round_dp(2)
        );
    }
    Ok(())
}

/// Deposit into an account.
pub async fn run_deposit(args: TransactArgs) -> Result<()> {
    transact(args, TransactionKind::Deposit).await
}

/// Withdraw from an account.
pub async fn run_withdraw(args: TransactArgs) -> Result<()> {
    transact(args, TransactionKind::Withdraw).await
}

async fn transact(args: TransactArgs, kind: TransactionKind) -> Result<()> {
    let amount = Amount::new(args.amount)?;

    let pool = open_pool().await?;
    let balance = AccountRepo::new(&pool)
        .apply(args.account_id, amount, kind)
        .await?;

    match kind {
        TransactionKind::Deposit => println!("Deposit successful."),
        TransactionKind::Withdraw => println!("Withdrawal successful."),
    }
    println!(
        "Updated balance for account {}: {}",
        args.account_id,
        balance.round_dp(2)
    );
    Ok(())
}

/// Show holder name and current balance.
pub async fn run_balance(args: BalanceArgs) -> Result<()> {
    let pool = open_pool().await?;
    let view = AccountRepo::new(&pool).balance(args.account_id).await?;

    println!("Account holder: {}", view.name);
    println!("Current balance: {}", view.balance.round_dp(2));
    Ok(())
}
