//! User CRUD handlers: list, register, update.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{Envelope, PublicUserDto, RegisterUserRequest, UpdateUserRequest};
use crate::app_state::AppState;
use crate::auth::password;
use crate::domain::{NewUser, UserPatch, UserRole};
use crate::error::{ApiError, ErrorEnvelope};

use super::require_field;

/// `GET /users` — List all accounts (sanitized).
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the collection cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    summary = "List users",
    description = "Returns every account in insertion order, without password hashes.",
    responses(
        (status = 200, description = "Enveloped user list", body = serde_json::Value),
        (status = 500, description = "Storage failure", body = ErrorEnvelope),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.user_store.list().await?;
    let data: Vec<PublicUserDto> = users.into_iter().map(Into::into).collect();
    Ok(Json(Envelope::ok(data)))
}

/// `POST /users` — Register a new account.
///
/// The plaintext password is Argon2id-hashed before it reaches the
/// store; the response carries the sanitized record only.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on missing fields or
/// [`ApiError::DuplicateEmail`] if the address is taken.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    summary = "Register a user",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "Enveloped created account", body = serde_json::Value),
        (status = 400, description = "Missing field or duplicate email", body = ErrorEnvelope),
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require_field(req.name, "name")?;
    let email = require_field(req.email, "email")?;
    let username = require_field(req.username, "username")?;
    let plain = require_field(req.password, "password")?;

    let password_hash =
        password::hash_password(&plain).map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = state
        .user_store
        .insert(NewUser {
            name,
            email,
            username,
            password_hash,
            role: UserRole::User,
        })
        .await?;

    Ok(Json(Envelope::with_message(
        PublicUserDto::from(user),
        "User registered successfully",
    )))
}

/// `PUT /users` — Partially update an account by id.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] for an unknown id or
/// [`ApiError::DuplicateEmail`] when an email change collides.
#[utoipa::path(
    put,
    path = "/api/v1/users",
    tag = "Users",
    summary = "Update a user",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Enveloped updated account", body = serde_json::Value),
        (status = 400, description = "Missing id or duplicate email", body = ErrorEnvelope),
        (status = 404, description = "Unknown id", body = ErrorEnvelope),
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = require_field(req.id, "id")?;

    let password_hash = match req.password {
        Some(plain) => {
            Some(password::hash_password(&plain).map_err(|e| ApiError::Internal(e.to_string()))?)
        }
        None => None,
    };

    let patch = UserPatch {
        name: req.name,
        email: req.email,
        username: req.username,
        password_hash,
        role: req.role,
        is_verified: req.is_verified,
        preferences: req.preferences,
    };

    let user = state.user_store.update(&id, patch).await?;
    Ok(Json(Envelope::ok(PublicUserDto::from(user))))
}

/// User management routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(register_user).put(update_user))
}
