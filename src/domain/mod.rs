//! Domain layer: persisted entity types and the donation status machine.
//!
//! This module contains the server-side model for the two persisted
//! collections: user accounts and donation receipts. Status transition
//! rules live on [`DonationStatus`] so that both the store and the HTTP
//! layer enforce the same one-way machine.

pub mod donation;
pub mod user;

pub use donation::{Donation, DonationPatch, DonationStatus, NewDonation};
pub use user::{NewUser, User, UserPatch, UserPreferences, UserRole};
