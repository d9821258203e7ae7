//! # API crate: thin REST client for the club backend
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, bearer token, 401 interception, envelope decoding |
//! | [`error`] | [`ApiError`] and the user-facing message helpers |
//! | [`models`] | Wire types for requests and responses |
//! | [`services`] | One service per route group: auth, users, events, leaderboard, admin, master |
//!
//! The server is an external collaborator; nothing here assumes more than the
//! `{success, message, data}` envelope and the paths listed in each service.

pub mod client;
pub mod error;
pub mod models;
pub mod services;

pub use client::{ApiClient, SessionExpiredHook};
pub use error::{ApiError, GENERIC_ERROR};
pub use models::{AuthGrant, Envelope};
