//! Registration and login endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use bankctl_core::{Email, Password};

use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Register request
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Register response
#[derive(Serialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub message: &'static str,
}

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Serialize)]
pub struct LoginResponse {
    pub email: String,
    pub message: &'static str,
}

/// POST /api/register - create a user with a hashed password
async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let email = Email::new(&req.email)?;
    let password = Password::new(&req.password)?;

    let user_id = UserRepo::new(&state.pool).register(&email, &password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id,
            message: "Registration successful! You can now log in.",
        }),
    ))
}

/// POST /api/login - verify credentials
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = Email::new(&req.email)?;

    UserRepo::new(&state.pool)
        .authenticate(&email, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        email: email.as_str().to_owned(),
        message: "Credentials verified.",
    }))
}

/// Auth routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
}

#[cfg(test)]
mod tests {
    // Integration tests with test database
    // Run with: DATABASE_URL=... cargo test -p bankctl-server -- --ignored
}
