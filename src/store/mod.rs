//! Persistence layer: one JSON file per entity collection.
//!
//! [`JsonCollection`] provides the shared whole-file read-modify-write
//! primitive with a per-collection lock; [`UserStore`] and
//! [`DonationStore`] specialize it with entity invariants (email
//! uniqueness, forced `pending` status, transition stamping). Stores are
//! constructed with an injected data directory so tests can point them
//! at throwaway paths.

pub mod donation_store;
pub mod json_file;
pub mod user_store;

pub use donation_store::DonationStore;
pub use json_file::JsonCollection;
pub use user_store::UserStore;
