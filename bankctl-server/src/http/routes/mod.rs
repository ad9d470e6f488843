//! Route modules - one per resource.

pub mod accounts;
pub mod auth;
pub mod health;
