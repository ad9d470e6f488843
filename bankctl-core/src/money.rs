//! Currency amounts as fixed-point decimals.
//!
//! Balances and transaction amounts are `rust_decimal::Decimal` with at
//! most 2 decimal places. Floating point never touches money.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Decimal places supported for currency values.
pub const CURRENCY_DP: u32 = 2;

/// A validated, strictly positive currency amount.
///
/// Construction enforces the boundary rules: amount > 0 and no more than
/// [`CURRENCY_DP`] decimal places. Used for both opening balances and
/// deposit/withdraw amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        // Decimal compares numerically, so 0.500 == 0.50 passes here
        // while 0.501 is rejected.
        if value.round_dp(CURRENCY_DP) != value {
            return Err(ValidationError::ExcessPrecision { max_dp: CURRENCY_DP });
        }
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.round_dp(CURRENCY_DP))
    }
}

/// Balance mutation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Withdraw => write!(f, "withdraw"),
        }
    }
}
