//! User account records.
//!
//! Accounts carry an Argon2id password hash, never a plaintext password.
//! The hash field is persisted to the collection file but is stripped by
//! the DTO layer before any record leaves the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role assigned to an account, gating the admin back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    /// Regular consumer account.
    User,
    /// Back-office administrator.
    Admin,
    /// Administrator with role management rights.
    SuperAdmin,
    /// Editorial account for content sections.
    ContentManager,
    /// Community moderation account.
    Moderator,
}

/// Per-account preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// UI language code (e.g. `"en"`, `"ar"`).
    pub language: String,
    /// IANA timezone name used for prayer-time display.
    pub timezone: String,
    /// Whether push notifications are enabled.
    pub notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            notifications: true,
        }
    }
}

/// A persisted user account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (UUID v4), immutable after creation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, unique across the collection (case-insensitive).
    pub email: String,
    /// Public handle.
    pub username: String,
    /// Argon2id PHC hash of the account password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stamped on every successful partial update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// Per-account preferences.
    pub preferences: UserPreferences,
}

/// Validated input for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Public handle.
    pub username: String,
    /// Argon2id PHC hash, computed at the HTTP boundary.
    pub password_hash: String,
    /// Role for the new account; registration defaults to [`UserRole::User`].
    pub role: UserRole,
}

/// Partial update merged onto an existing user.
///
/// `id` is deliberately absent: identifiers are immutable.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    /// New display name.
    pub name: Option<String>,
    /// New email; uniqueness is re-validated by the store.
    pub email: Option<String>,
    /// New handle.
    pub username: Option<String>,
    /// Replacement password hash.
    pub password_hash: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// Email-verification flag.
    pub is_verified: Option<bool>,
    /// Replacement preferences.
    pub preferences: Option<UserPreferences>,
}

impl User {
    /// Materializes a new account from validated input.
    #[must_use]
    pub fn create(input: NewUser) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            username: input.username,
            password_hash: input.password_hash,
            role: input.role,
            created_at: Utc::now(),
            updated_at: None,
            is_verified: false,
            preferences: UserPreferences::default(),
        }
    }

    /// Shallow-merges a patch onto this record and stamps `updated_at`.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(hash) = patch.password_hash {
            self.password_hash = hash;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(verified) = patch.is_verified {
            self.is_verified = verified;
        }
        if let Some(prefs) = patch.preferences {
            self.preferences = prefs;
        }
        self.updated_at = Some(Utc::now());
    }

    /// Case-insensitive email comparison used for lookup and uniqueness.
    ///
    /// Real-world email handling is case-insensitive by convention; the
    /// chosen behavior is pinned by tests.
    #[must_use]
    pub fn email_matches(&self, other: &str) -> bool {
        self.email.eq_ignore_ascii_case(other)
    }
}
