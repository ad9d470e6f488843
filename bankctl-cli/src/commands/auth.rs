//! Register and login commands.

use anyhow::Result;
use clap::Parser;

use bankctl_core::{Email, Password};
use bankctl_server::db::UserRepo;

use super::open_pool;

/// Arguments for the register command
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    /// Email address to register
    pub email: String,

    /// Password (at least 6 characters)
    pub password: String,
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Register a new user with a hashed password.
pub async fn run_register(args: RegisterArgs) -> Result<()> {
    let email = Email::new(&args.email)?;
    let password = Password::new(&args.password)?;

    let pool = open_pool().await?;
    let user_id = UserRepo::new(&pool).register(&email, &password).await?;

    tracing::debug!(user_id, "user registered");
    println!("Registration successful! You can now log in.");
    Ok(())
}

/// Verify credentials against the stored hash.
pub async fn run_login(args: LoginArgs) -> Result<()> {
    let email = Email::new(&args.email)?;

    let pool = open_pool().await?;
    UserRepo::new(&pool).authenticate(&email, &args.password).await?;

    println!("Credentials verified. Logged in as: {}", email.as_str());
    Ok(())
}
