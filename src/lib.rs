//! # amanah-api
//!
//! REST backend for the Amanah lifestyle application's account and
//! donation-receipt workflow.
//!
//! Two structurally parallel collection stores persist users and donations
//! to one JSON file each. Donations move through a one-way status machine
//! (`pending → verified | rejected`) stamped by an admin reviewer. Route
//! handlers translate HTTP verbs into store operations and wrap every
//! result in the uniform `{success, data|error, message}` envelope.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── UserStore / DonationStore (store/)
//!     │       └── JsonCollection (serialized read-modify-write)
//!     │
//!     └── JSON files on disk (one per entity)
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;
