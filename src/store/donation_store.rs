//! Donation collection store with forced-pending inserts and transition
//! stamping.

use std::path::Path;

use crate::domain::{Donation, DonationPatch, NewDonation};
use crate::error::ApiError;

use super::json_file::JsonCollection;

/// File name of the donation collection inside the data directory.
const DONATIONS_FILE: &str = "donations.json";

/// Persistent store for donation records.
///
/// A fresh environment yields a legitimately empty collection; there is
/// no demo fallback masking real state.
#[derive(Debug)]
pub struct DonationStore {
    collection: JsonCollection<Donation>,
}

impl DonationStore {
    /// Creates a store backed by `<data_dir>/donations.json`.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        Self {
            collection: JsonCollection::new(data_dir.join(DONATIONS_FILE), Vec::new()),
        }
    }

    /// Returns the full collection in submission order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on I/O or parse failure.
    pub async fn list(&self) -> Result<Vec<Donation>, ApiError> {
        self.collection.read_all().await
    }

    /// Inserts a new donation.
    ///
    /// Status is forced to `pending` and `submitted_at` stamped inside
    /// the critical section, regardless of anything the caller supplied.
    /// The returned record is exactly what was persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on persistence failure.
    pub async fn insert(&self, input: NewDonation) -> Result<Donation, ApiError> {
        self.collection
            .mutate(|donations| {
                let donation = Donation::create(input.clone());
                donations.push(donation.clone());
                tracing::info!(
                    donation_id = %donation.id,
                    amount = donation.amount,
                    currency = %donation.currency,
                    "donation submitted"
                );
                Ok(donation)
            })
            .await
    }

    /// Applies a review patch to the donation with `id`.
    ///
    /// Transition rules are enforced by [`Donation::apply`]; a rejected
    /// transition leaves the collection untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DonationNotFound`] for an unknown id,
    /// [`ApiError::InvalidTransition`] when leaving a terminal status,
    /// or [`ApiError::Storage`] on persistence failure.
    pub async fn update(&self, id: &str, patch: DonationPatch) -> Result<Donation, ApiError> {
        self.collection
            .mutate(|donations| {
                let donation = donations
                    .iter_mut()
                    .find(|d| d.id == id)
                    .ok_or_else(|| ApiError::DonationNotFound(id.to_string()))?;
                donation.apply(patch)?;
                tracing::info!(
                    donation_id = %donation.id,
                    status = %donation.status,
                    reviewer = donation.verified_by.as_deref().unwrap_or("-"),
                    "donation reviewed"
                );
                Ok(donation.clone())
            })
            .await
    }
}
