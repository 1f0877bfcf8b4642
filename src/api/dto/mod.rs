//! Data Transfer Objects for REST request/response serialization.
//!
//! Every success response is wrapped in [`Envelope`]; user-facing DTOs
//! never carry the password hash.

pub mod common_dto;
pub mod donation_dto;
pub mod user_dto;

pub use common_dto::*;
pub use donation_dto::*;
pub use user_dto::*;
