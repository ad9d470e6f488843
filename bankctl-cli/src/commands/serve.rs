//! HTTP server command.
//!
//! Runs the bankctl HTTP API over the shared pool.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use bankctl_server::http::{run_server, ServerConfig};

use super::open_pool;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server (blocks until shutdown).
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting bankctl server on {}", args.bind);

    let pool = open_pool().await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
