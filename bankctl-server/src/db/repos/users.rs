//! User repository - the credential store.
//!
//! Persists (email, password_hash) pairs. Email uniqueness is enforced by
//! the database constraint and surfaced as a structured error - duplicate
//! detection never inspects error message strings.

use sqlx::PgPool;

use bankctl_core::credentials::{hash_password, verify_password, Email, Password};
use bankctl_core::error::HashError;

/// Credential store error.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("this email is already registered")]
    DuplicateEmail,

    #[error("email not found")]
    EmailNotFound,

    #[error("incorrect password")]
    WrongPassword,

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// User repository.
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a new user, hashing the password before storage.
    ///
    /// A unique-constraint violation on email maps to
    /// [`CredentialError::DuplicateEmail`] and leaves the existing row
    /// (including its stored hash) untouched.
    pub async fn register(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<i64, CredentialError> {
        let password_hash = hash_password(password)?;

        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id",
        )
        .bind(email.as_str())
        .bind(&password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                CredentialError::DuplicateEmail
            }
            _ => CredentialError::Sqlx(err),
        })?;

        Ok(user_id)
    }

    /// Check a submitted password against the stored hash.
    ///
    /// Login accepts any plaintext - the registration length policy does
    /// not apply here, a wrong short password is just a wrong password.
    pub async fn authenticate(
        &self,
        email: &Email,
        plaintext: &str,
    ) -> Result<(), CredentialError> {
        let stored_hash: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
                .bind(email.as_str())
                .fetch_optional(self.pool)
                .await?;

        let stored_hash = stored_hash.ok_or(CredentialError::EmailNotFound)?;

        if verify_password(plaintext, &stored_hash)? {
            Ok(())
        } else {
            Err(CredentialError::WrongPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p bankctl-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("connect failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn unique_email(tag: &str) -> Email {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        Email::new(&format!("{tag}-{nanos}@test.invalid")).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn register_then_authenticate() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);
        let email = unique_email("auth");
        let password = Password::new("secret1").unwrap();

        repo.register(&email, &password).await.expect("register failed");

        repo.authenticate(&email, "secret1")
            .await
            .expect("correct password rejected");
        assert!(matches!(
            repo.authenticate(&email, "wrong").await,
            Err(CredentialError::WrongPassword)
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_email_keeps_original_hash() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);
        let email = unique_email("dup");

        repo.register(&email, &Password::new("secret1").unwrap())
            .await
            .expect("first register failed");

        let second = repo
            .register(&email, &Password::new("other12").unwrap())
            .await;
        assert!(matches!(second, Err(CredentialError::DuplicateEmail)));

        // The first password must still authenticate.
        repo.authenticate(&email, "secret1")
            .await
            .expect("original credentials no longer valid");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_email_is_not_found() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);
        let email = unique_email("missing");

        assert!(matches!(
            repo.authenticate(&email, "whatever").await,
            Err(CredentialError::EmailNotFound)
        ));
    }
}
