//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Connection pool threaded explicitly - no hidden global handle
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Withdrawals are a single atomic conditional UPDATE - no
//!   check-then-act race between sessions

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::connect_with_retry;
pub use repos::*;
