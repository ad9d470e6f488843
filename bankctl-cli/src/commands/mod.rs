//! Command implementations for the bankctl CLI.

pub mod account;
pub mod auth;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use account::{run_account, run_balance, run_deposit, run_withdraw};
pub use auth::{run_login, run_register};
pub use serve::run_serve;

use anyhow::{Context, Result};
use sqlx::PgPool;

use bankctl_core::DbConfig;
use bankctl_server::db::{connect_with_retry, migrations};

/// Open the shared pool and bootstrap the schema.
///
/// Connection failures are retried inside `connect_with_retry`; once the
/// retry budget is spent this returns the fatal operator-facing error and
/// the process exits nonzero.
pub async fn open_pool() -> Result<PgPool> {
    let config = DbConfig::from_env().context("invalid database configuration")?;

    let pool = connect_with_retry(&config).await.with_context(|| {
        format!(
            "failed to establish database connection after {} attempts; \
             check that the database server is running and the credentials are correct",
            config.max_retries
        )
    })?;

    migrations::run(&pool)
        .await
        .context("failed to initialize database schema")?;

    Ok(pool)
}
