//! bankctl-core: domain types for the bankctl account manager
//!
//! Pure logic only - no database or HTTP code lives here:
//! - Currency amounts with 2-decimal-place fixed-point semantics
//! - Credential validation and argon2 password hashing
//! - Database configuration loaded from the environment
//! - Structured validation errors

pub mod config;
pub mod credentials;
pub mod error;
pub mod money;

pub use config::DbConfig;
pub use credentials::{Email, Password};
pub use error::{non_empty, HashError, ValidationError};
pub use money::{Amount, TransactionKind};
