//! Structured error types for bankctl-core.
//!
//! Uses `thiserror` for composable errors. The binary crate (bankctl-cli)
//! uses `anyhow` at its boundary, but library consumers get structured,
//! matchable variants.

use thiserror::Error;

/// Validation error for user-supplied input.
///
/// Every variant is rejected before any SQL runs - no state change occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Email doesn't look like an address
    #[error("'{value}' is not a valid email address")]
    InvalidEmail { value: String },

    /// Password is shorter than the minimum
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// Amount must be strictly positive
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount carries more precision than currency allows
    #[error("amount supports at most {max_dp} decimal places")]
    ExcessPrecision { max_dp: u32 },
}

/// Reject empty (or whitespace-only) input, returning the trimmed value.
pub fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Password hashing failure.
///
/// Mismatches are NOT errors - `verify_password` returns `Ok(false)` for
/// those. These variants cover the hash machinery itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("failed to hash password")]
    Hash,

    #[error("stored password hash is malformed")]
    MalformedHash,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "name" };
        assert_eq!(err.to_string(), "name cannot be empty");

        let err = ValidationError::PasswordTooShort { min: 6 };
        assert_eq!(err.to_string(), "password must be at least 6 characters");

        let err = ValidationError::ExcessPrecision { max_dp: 2 };
        assert!(err.to_string().contains("2 decimal places"));
    }

    #[test]
    fn non_empty_trims() {
        assert_eq!(non_empty("name", "  Ada  ").unwrap(), "Ada");
        assert_eq!(
            non_empty("name", "   "),
            Err(ValidationError::Empty { field: "name" })
        );
    }
}
