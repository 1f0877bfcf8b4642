//! Login handler: email + Argon2id password verification.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{Envelope, LoginRequest, PublicUserDto};
use crate::app_state::AppState;
use crate::auth::password;
use crate::error::{ApiError, ErrorEnvelope};

use super::require_field;

/// `POST /auth/login` — Verify credentials and return the sanitized
/// account.
///
/// An unknown email and a wrong password produce the same 401 so the
/// endpoint cannot be used to probe for registered addresses.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on missing fields or
/// [`ApiError::InvalidCredentials`] on a failed check.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    summary = "Log in",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Enveloped account, no password hash", body = serde_json::Value),
        (status = 400, description = "Missing fields", body = ErrorEnvelope),
        (status = 401, description = "Bad credentials", body = ErrorEnvelope),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = require_field(req.email, "email")?;
    let plain = require_field(req.password, "password")?;

    let user = state
        .user_store
        .find_by_email(&email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let verified = password::verify_password(&plain, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !verified {
        tracing::debug!(user_id = %user.id, "login rejected");
        return Err(ApiError::InvalidCredentials);
    }

    tracing::info!(user_id = %user.id, "login succeeded");
    Ok(Json(Envelope::with_message(
        PublicUserDto::from(user),
        "Login successful",
    )))
}

/// Authentication routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}
