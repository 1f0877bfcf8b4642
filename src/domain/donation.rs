//! Donation records and their one-way status machine.
//!
//! Every donation is created as [`DonationStatus::Pending`] and may move
//! exactly once to `Verified` or `Rejected`. Both of those states are
//! terminal: rejected donations are retained as an audit trail, never
//! deleted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Review status of a donation receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    /// Submitted by a donor, awaiting admin review.
    Pending,
    /// Receipt confirmed by an admin. Terminal.
    Verified,
    /// Receipt declined by an admin. Terminal.
    Rejected,
}

impl DonationStatus {
    /// Returns `true` for statuses that admit no further transition.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Verified | Self::Rejected)
    }

    /// Returns `true` if a record in `self` may move to `to`.
    ///
    /// The machine is `pending → verified` and `pending → rejected`;
    /// re-asserting the current status is a no-op and allowed.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, _) | (Self::Verified, Self::Verified) | (Self::Rejected, Self::Rejected)
        )
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

/// A persisted donation record.
///
/// Field names serialize in camelCase to match the on-disk collection
/// layout and the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Unique identifier (UUID v4), immutable after creation.
    pub id: String,
    /// Donor display name.
    pub donor_name: String,
    /// Donor contact email.
    pub donor_email: String,
    /// Optional donor phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_phone: Option<String>,
    /// Donated amount, strictly positive.
    pub amount: f64,
    /// ISO currency code.
    pub currency: String,
    /// Optional message from the donor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Receipt reference: a file path or an inline data URI.
    pub receipt_url: String,
    /// Current review status.
    pub status: DonationStatus,
    /// Submission timestamp, set at creation and immutable.
    pub submitted_at: DateTime<Utc>,
    /// Set exactly when the status leaves `pending`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
    /// Reviewer attribution, set alongside `verified_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<String>,
}

/// Validated input for creating a donation.
///
/// Status and submission timestamp are never caller-supplied; the store
/// forces `pending` and stamps `submitted_at` itself.
#[derive(Debug, Clone)]
pub struct NewDonation {
    /// Donor display name.
    pub donor_name: String,
    /// Donor contact email.
    pub donor_email: String,
    /// Optional donor phone number.
    pub donor_phone: Option<String>,
    /// Donated amount, already validated as positive.
    pub amount: f64,
    /// ISO currency code.
    pub currency: String,
    /// Optional message from the donor.
    pub message: Option<String>,
    /// Receipt reference.
    pub receipt_url: String,
}

/// Partial update applied to an existing donation.
///
/// Only review fields are mutable; donor-supplied fields are frozen at
/// submission time.
#[derive(Debug, Clone, Default)]
pub struct DonationPatch {
    /// New review status, validated against the transition rules.
    pub status: Option<DonationStatus>,
    /// Reviewer attribution.
    pub verified_by: Option<String>,
}

impl Donation {
    /// Materializes a new record from validated input.
    ///
    /// Always starts in `pending` with `verified_at`/`verified_by` unset.
    #[must_use]
    pub fn create(input: NewDonation) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            donor_name: input.donor_name,
            donor_email: input.donor_email,
            donor_phone: input.donor_phone,
            amount: input.amount,
            currency: input.currency,
            message: input.message,
            receipt_url: input.receipt_url,
            status: DonationStatus::Pending,
            submitted_at: Utc::now(),
            verified_at: None,
            verified_by: None,
        }
    }

    /// Merges a patch onto this record, enforcing the status machine.
    ///
    /// When the merged status is non-pending, `verified_at` is stamped
    /// with the current time. Should a merge ever yield `pending` again,
    /// both review fields are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidTransition`] if the patch tries to
    /// move the record out of a terminal status.
    pub fn apply(&mut self, patch: DonationPatch) -> Result<(), ApiError> {
        if let Some(next) = patch.status {
            if !self.status.can_transition_to(next) {
                return Err(ApiError::InvalidTransition {
                    from: self.status,
                    to: next,
                });
            }
            self.status = next;
        }
        if let Some(reviewer) = patch.verified_by {
            self.verified_by = Some(reviewer);
        }
        if self.status == DonationStatus::Pending {
            self.verified_at = None;
            self.verified_by = None;
        } else if self.verified_at.is_none() {
            self.verified_at = Some(Utc::now());
        }
        Ok(())
    }
}
