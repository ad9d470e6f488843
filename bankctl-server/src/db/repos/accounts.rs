//! Account repository - the account ledger.
//!
//! Balances are NUMERIC(14,2); every read re-queries the store. The
//! withdrawal path is a single atomic conditional UPDATE so two sessions
//! can never both pass a balance check and overdraw the same account.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use bankctl_core::{Amount, TransactionKind};

/// Account row as listed.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub balance: Decimal,
}

/// Holder name and balance for a single account.
#[derive(Debug, Clone, FromRow)]
pub struct BalanceView {
    pub name: String,
    pub balance: Decimal,
}

/// Account ledger error.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("account {id} not found")]
    AccountNotFound { id: i64 },

    #[error("insufficient balance: current balance is {current}")]
    InsufficientFunds { current: Decimal },

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Account repository.
pub struct AccountRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AccountRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an account with a positive opening balance.
    ///
    /// The opening-balance > 0 rule is enforced by [`Amount`] at the
    /// boundary, before this call.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        opening_balance: Amount,
    ) -> Result<i64, LedgerError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO accounts (name, email, balance) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(email)
        .bind(opening_balance.get())
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// List every account. An empty list is a valid outcome.
    pub async fn list(&self) -> Result<Vec<AccountRecord>, LedgerError> {
        let accounts = sqlx::query_as::<_, AccountRecord>(
            "SELECT id, name, email, balance FROM accounts ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(accounts)
    }

    /// Apply a deposit or withdrawal, returning the new balance.
    ///
    /// Withdrawal is one conditional statement: the balance guard lives in
    /// the WHERE clause, so concurrent withdrawals serialize on the row
    /// and can never drive the balance negative. Zero affected rows means
    /// either the guard failed or the account doesn't exist; one follow-up
    /// read tells the two apart.
    pub async fn apply(
        &self,
        account_id: i64,
        amount: Amount,
        kind: TransactionKind,
    ) -> Result<Decimal, LedgerError> {
        let sql = match kind {
            TransactionKind::Deposit => {
                "UPDATE accounts SET balance = balance + $1 WHERE id = $2 RETURNING balance"
            }
            TransactionKind::Withdraw => {
                "UPDATE accounts SET balance = balance - $1 \
                 WHERE id = $2 AND balance >= $1 RETURNING balance"
            }
        };

        let new_balance: Option<Decimal> = sqlx::query_scalar(sql)
            .bind(amount.get())
            .bind(account_id)
            .fetch_optional(self.pool)
            .await?;

        match new_balance {
            Some(balance) => Ok(balance),
            None => {
                let current: Option<Decimal> =
                    sqlx::query_scalar("SELECT balance FROM accounts WHERE id = $1")
                        .bind(account_id)
                        .fetch_optional(self.pool)
                        .await?;
                match current {
                    Some(current) => Err(LedgerError::InsufficientFunds { current }),
                    None => Err(LedgerError::AccountNotFound { id: account_id }),
                }
            }
        }
    }

    /// Fetch holder name and balance for one account.
    pub async fn balance(&self, account_id: i64) -> Result<BalanceView, LedgerError> {
        sqlx::query_as::<_, BalanceView>(
            "SELECT name, balance FROM accounts WHERE id = $1",
        )
        .bind(account_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(LedgerError::AccountNotFound { id: account_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p bankctl-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("connect failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn withdraw_never_overdraws() {
        let pool = test_pool().await;
        let repo = AccountRepo::new(&pool);

        let id = repo
            .create("Ada", "ada@test.invalid", Amount::new(dec!(100.00)).unwrap())
            .await
            .expect("create failed");

        // Over-withdrawal fails and reports the current balance.
        let err = repo
            .apply(id, Amount::new(dec!(150.00)).unwrap(), TransactionKind::Withdraw)
            .await
            .unwrap_err();
        match err {
            LedgerError::InsufficientFunds { current } => assert_eq!(current, dec!(100.00)),
            other => panic!("expected InsufficientFunds, got {other}"),
        }

        // Balance is unchanged by the failed withdrawal.
        let view = repo.balance(id).await.expect("balance failed");
        assert_eq!(view.balance, dec!(100.00));

        // A covered withdrawal and a deposit move the balance as expected.
        let after_withdraw = repo
            .apply(id, Amount::new(dec!(50.00)).unwrap(), TransactionKind::Withdraw)
            .await
            .expect("withdraw failed");
        assert_eq!(after_withdraw, dec!(50.00));

        let after_deposit = repo
            .apply(id, Amount::new(dec!(25.00)).unwrap(), TransactionKind::Deposit)
            .await
            .expect("deposit failed");
        assert_eq!(after_deposit, dec!(75.00));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn deposit_withdraw_round_trip() {
        let pool = test_pool().await;
        let repo = AccountRepo::new(&pool);

        let id = repo
            .create("Grace", "grace@test.invalid", Amount::new(dec!(40.50)).unwrap())
            .await
            .expect("create failed");

        let amount = Amount::new(dec!(13.37)).unwrap();
        repo.apply(id, amount, TransactionKind::Deposit)
            .await
            .expect("deposit failed");
        let back = repo
            .apply(id, amount, TransactionKind::Withdraw)
            .await
            .expect("withdraw failed");

        assert_eq!(back, dec!(40.50));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_account_is_not_found() {
        let pool = test_pool().await;
        let repo = AccountRepo::new(&pool);

        assert!(matches!(
            repo.balance(i64::MAX).await,
            Err(LedgerError::AccountNotFound { .. })
        ));
        assert!(matches!(
            repo.apply(i64::MAX, Amount::new(dec!(1.00)).unwrap(), TransactionKind::Deposit)
                .await,
            Err(LedgerError::AccountNotFound { .. })
        ));
    }
}
