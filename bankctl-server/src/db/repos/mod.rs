//! Repositories over the relational store.
//!
//! Two repositories, one per table: [`users::UserRepo`] is the credential
//! store, [`accounts::AccountRepo`] is the account ledger. Both borrow the
//! pool; nothing is cached across requests.

pub mod accounts;
pub mod users;

pub use accounts::{AccountRecord, AccountRepo, BalanceView, LedgerError};
pub use users::{CredentialError, UserRepo};
