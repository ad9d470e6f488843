//! Account endpoints - create, list, transact, balance.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bankctl_core::{non_empty, Amount, TransactionKind};

use crate::db::repos::{AccountRecord, AccountRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create account request
#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub email: String,
    pub opening_balance: Decimal,
}

/// Create account response
#[derive(Serialize)]
pub struct CreateAccountResponse {
    pub account_id: i64,
}

/// Account as listed
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub balance: Decimal,
}

impl From<AccountRecord> for AccountResponse {
    fn from(a: AccountRecord) -> Self {
        Self {
            id: a.id,
            name: a.name,
            email: a.email,
            balance: a.balance,
        }
    }
}

/// List response
#[derive(Serialize)]
pub struct ListAccountsResponse {
    pub accounts: Vec<AccountResponse>,
}

/// Transact request
#[derive(Deserialize)]
pub struct TransactRequest {
    pub amount: Decimal,
    pub kind: TransactionKind,
}

/// Transact response
#[derive(Serialize)]
pub struct TransactResponse {
    pub account_id: i64,
    pub balance: Decimal,
}

/// Balance response
#[derive(Serialize)]
pub struct BalanceResponse {
    pub name: String,
    pub balance: Decimal,
}

/// POST /api/accounts - create an account with an opening balance
async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<CreateAccountResponse>), ApiError> {
    let name = non_empty("name", &req.name)?;
    // Account contact email is free-form and intentionally not unique.
    let email = non_empty("email", &req.email)?;
    let opening_balance = Amount::new(req.opening_balance)?;

    let account_id = AccountRepo::new(&state.pool)
        .create(&name, &email, opening_balance)
        .await?;

    Ok((StatusCode::CREATED, Json(CreateAccountResponse { account_id })))
}

/// GET /api/accounts - list every account
async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListAccountsResponse>, ApiError> {
    let accounts = AccountRepo::new(&state.pool).list().await?;

    Ok(Json(ListAccountsResponse {
        accounts: accounts.into_iter().map(AccountResponse::from).collect(),
    }))
}

/// POST /api/accounts/{id}/transact - deposit or withdraw
async fn transact(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
    Json(req): Json<TransactRequest>,
) -> Result<Json<TransactResponse>, ApiError> {
    let amount = Amount::new(req.amount)?;

    let balance = AccountRepo::new(&state.pool)
        .apply(account_id, amount, req.kind)
        .await?;

    Ok(Json(TransactResponse {
        account_id,
        balance,
    }))
}

/// GET /api/accounts/{id}/balance - holder name and current balance
async fn balance(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let view = AccountRepo::new(&state.pool).balance(account_id).await?;

    Ok(Json(BalanceResponse {
        name: view.name,
        balance: view.balance,
    }))
}

/// Account routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/accounts", get(list_accounts).post(create_account))
        .route("/api/accounts/{id}/transact", post(transact))
        .route("/api/accounts/{id}/balance", get(balance))
}

#[cfg(test)]
mod tests {
    // Integration tests with test database
    // Run with: DATABASE_URL=... cargo test -p bankctl-server -- --ignored
}
