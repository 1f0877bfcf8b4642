//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::store::{DonationStore, UserStore};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// User account store.
    pub user_store: Arc<UserStore>,
    /// Donation receipt store.
    pub donation_store: Arc<DonationStore>,
    /// Currency stamped on donations that omit one.
    pub default_currency: String,
}
