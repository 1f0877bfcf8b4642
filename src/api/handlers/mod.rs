//! REST endpoint handlers organized by resource.

pub mod auth;
pub mod donations;
pub mod system;
pub mod users;

use axum::Router;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(users::routes())
        .merge(donations::routes())
        .merge(auth::routes())
}

/// Unwraps a required request field, rejecting missing or blank values
/// with an enveloped 400.
pub(crate) fn require_field(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(format!("missing required field: {field}"))),
    }
}
