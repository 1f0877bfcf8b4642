//! User collection store with email uniqueness enforcement.

use std::path::Path;

use crate::auth::password;
use crate::domain::{NewUser, User, UserPatch, UserRole};
use crate::error::ApiError;

use super::json_file::JsonCollection;

/// File name of the user collection inside the data directory.
const USERS_FILE: &str = "users.json";

/// Password shared by the demo accounts seeded on first access.
const DEMO_PASSWORD: &str = "amanah-demo";

/// Demo accounts materialized when the backing file does not exist yet.
/// One account per role so the back office is reachable out of the box.
const DEMO_ACCOUNTS: [(&str, &str, &str, UserRole); 5] = [
    ("Ahmed Hassan", "ahmed@amanah.app", "ahmed", UserRole::SuperAdmin),
    ("Fatima Noor", "fatima@amanah.app", "fatima", UserRole::Admin),
    ("Yusuf Ali", "yusuf@amanah.app", "yusuf", UserRole::ContentManager),
    ("Maryam Siddiqui", "maryam@amanah.app", "maryam", UserRole::Moderator),
    ("Omar Farooq", "omar@amanah.app", "omar", UserRole::User),
];

/// Persistent store for user accounts.
///
/// All mutations run under the collection lock, including the duplicate
/// email check, so a racing pair of registrations with the same address
/// cannot both land.
#[derive(Debug)]
pub struct UserStore {
    collection: JsonCollection<User>,
}

impl UserStore {
    /// Creates a store backed by `<data_dir>/users.json`.
    ///
    /// With `seed_demo` set, the first read of a missing file materializes
    /// the five demo accounts (their passwords are Argon2id-hashed here,
    /// never stored in the clear).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if hashing the demo password fails.
    pub fn open(data_dir: &Path, seed_demo: bool) -> Result<Self, ApiError> {
        let seed = if seed_demo {
            Self::demo_accounts()?
        } else {
            Vec::new()
        };
        Ok(Self {
            collection: JsonCollection::new(data_dir.join(USERS_FILE), seed),
        })
    }

    fn demo_accounts() -> Result<Vec<User>, ApiError> {
        let hash = password::hash_password(DEMO_PASSWORD)
            .map_err(|e| ApiError::Internal(format!("demo seed hashing failed: {e}")))?;
        Ok(DEMO_ACCOUNTS
            .iter()
            .map(|(name, email, username, role)| {
                let mut user = User::create(NewUser {
                    name: (*name).to_string(),
                    email: (*email).to_string(),
                    username: (*username).to_string(),
                    password_hash: hash.clone(),
                    role: *role,
                });
                user.is_verified = true;
                user
            })
            .collect())
    }

    /// Returns the full collection in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on I/O or parse failure.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.collection.read_all().await
    }

    /// Looks up an account by email, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on I/O or parse failure.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.collection.read_all().await?;
        Ok(users.into_iter().find(|u| u.email_matches(email)))
    }

    /// Inserts a new account, rejecting duplicate emails.
    ///
    /// The uniqueness check runs inside the same critical section as the
    /// append, so the collection is unchanged after a rejected attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DuplicateEmail`] if the address is taken, or
    /// [`ApiError::Storage`] on persistence failure.
    pub async fn insert(&self, input: NewUser) -> Result<User, ApiError> {
        self.collection
            .mutate(|users| {
                if users.iter().any(|u| u.email_matches(&input.email)) {
                    return Err(ApiError::DuplicateEmail(input.email.clone()));
                }
                let user = User::create(input.clone());
                users.push(user.clone());
                tracing::info!(user_id = %user.id, role = ?user.role, "user registered");
                Ok(user)
            })
            .await
    }

    /// Shallow-merges `patch` onto the account with `id`.
    ///
    /// An email change re-validates uniqueness against every other
    /// record; the id itself is never touched by the merge.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] for an unknown id,
    /// [`ApiError::DuplicateEmail`] if the new email is taken, or
    /// [`ApiError::Storage`] on persistence failure.
    pub async fn update(&self, id: &str, patch: UserPatch) -> Result<User, ApiError> {
        self.collection
            .mutate(|users| {
                let position = users
                    .iter()
                    .position(|u| u.id == id)
                    .ok_or_else(|| ApiError::UserNotFound(id.to_string()))?;

                if let Some(new_email) = &patch.email
                    && users
                        .iter()
                        .any(|u| u.id != id && u.email_matches(new_email))
                {
                    return Err(ApiError::DuplicateEmail(new_email.clone()));
                }

                let user = users
                    .get_mut(position)
                    .ok_or_else(|| ApiError::Internal("index vanished under lock".to_string()))?;
                user.apply(patch);
                tracing::debug!(user_id = %user.id, "user updated");
                Ok(user.clone())
            })
            .await
    }
}
