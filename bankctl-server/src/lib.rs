//! bankctl-server: Postgres persistence and HTTP API for bankctl
//!
//! Exposes the six user-facing operations (register, login, create
//! account, list accounts, transact, balance) over axum, backed by the
//! repository layer in [`db`]. The CLI binds the same repositories
//! directly.

pub mod db;
pub mod http;

pub use db::pool::connect_with_retry;
