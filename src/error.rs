//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code, and the `IntoResponse` impl
//! renders the uniform `{success: false, error: "..."}` envelope used
//! by every route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DonationStatus;

/// Envelope body rendered for every error response.
///
/// ```json
/// {
///   "success": false,
///   "error": "donation not found: 7c5ce4f0-..."
/// }
/// ```
///
/// No stack traces or internal paths are ever included.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false` for error responses.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant              | HTTP Status                |
/// |----------------------|----------------------------|
/// | `Validation`         | 400 Bad Request            |
/// | `DuplicateEmail`     | 400 Bad Request            |
/// | `InvalidCredentials` | 401 Unauthorized           |
/// | `UserNotFound`       | 404 Not Found              |
/// | `DonationNotFound`   | 404 Not Found              |
/// | `InvalidTransition`  | 409 Conflict               |
/// | `Storage`            | 500 Internal Server Error  |
/// | `Internal`           | 500 Internal Server Error  |
/// | `Unavailable`        | 503 Service Unavailable    |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request validation failed (missing or malformed field).
    #[error("invalid request: {0}")]
    Validation(String),

    /// A user with the given email already exists.
    #[error("a user with email {0} already exists")]
    DuplicateEmail(String),

    /// Email/password pair did not match any account.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// User with the given ID was not found.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// Donation with the given ID was not found.
    #[error("donation not found: {0}")]
    DonationNotFound(String),

    /// Attempted to move a donation out of a terminal status.
    #[error("cannot change donation status from {from} to {to}")]
    InvalidTransition {
        /// Status the record currently holds.
        from: DonationStatus,
        /// Status the caller asked for.
        to: DonationStatus,
    },

    /// File-backed store failure (I/O or JSON parse).
    #[error("storage error: {0}")]
    Storage(String),

    /// Transient storage contention; the caller may retry.
    #[error("store temporarily unavailable: {0}")]
    Unavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotFound(_) | Self::DonationNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidTransition { .. } => StatusCode::CONFLICT,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorEnvelope {
            success: false,
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::Validation("missing amount".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_email_maps_to_400() {
        let err = ApiError::DuplicateEmail("a@x.com".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::DonationNotFound("missing-id".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn transition_maps_to_409() {
        let err = ApiError::InvalidTransition {
            from: DonationStatus::Verified,
            to: DonationStatus::Rejected,
        };
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn storage_maps_to_500() {
        let err = ApiError::Storage("disk full".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_is_envelope_shaped() {
        let err = ApiError::InvalidCredentials;
        let body = ErrorEnvelope {
            success: false,
            error: err.to_string(),
        };
        let json = serde_json::to_value(&body).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json.get("success"), Some(&serde_json::Value::Bool(false)));
        assert!(json.get("error").is_some());
    }
}
