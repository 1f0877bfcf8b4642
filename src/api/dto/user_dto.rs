//! User request/response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserPreferences, UserRole};

/// Sanitized user shape returned by every route.
///
/// The password hash never leaves the store layer in any response,
/// including the registration response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserDto {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Public handle.
    pub username: String,
    /// Assigned role.
    pub role: UserRole,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, if ever updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// Per-account preferences.
    pub preferences: UserPreferences,
}

impl From<User> for PublicUserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
            is_verified: user.is_verified,
            preferences: user.preferences,
        }
    }
}

/// `POST /users` request body.
///
/// Required fields are optional at the serde level so that missing
/// fields surface as enveloped 400s rather than bare extractor
/// rejections.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// Display name. Required.
    pub name: Option<String>,
    /// Login email. Required, unique.
    pub email: Option<String>,
    /// Public handle. Required.
    pub username: Option<String>,
    /// Plaintext password, hashed before it reaches the store. Required.
    pub password: Option<String>,
}

/// `PUT /users` request body: target id plus the fields to merge.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// Target record id. Required.
    pub id: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New email; uniqueness is re-validated.
    pub email: Option<String>,
    /// New handle.
    pub username: Option<String>,
    /// New plaintext password, re-hashed before storage.
    pub password: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// Email-verification flag.
    pub is_verified: Option<bool>,
    /// Replacement preferences.
    pub preferences: Option<UserPreferences>,
}

/// `POST /auth/login` request body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email. Required.
    pub email: Option<String>,
    /// Plaintext password. Required.
    pub password: Option<String>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::NewUser;

    #[test]
    fn public_dto_never_carries_hash() {
        let user = User::create(NewUser {
            name: "Test".to_string(),
            email: "t@example.com".to_string(),
            username: "t".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: UserRole::User,
        });
        let dto = PublicUserDto::from(user);
        let json = serde_json::to_string(&dto).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }
}
