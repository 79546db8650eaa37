//! # API crate — REST client for the marketplace backend
//!
//! Thin typed layer over the Django backend's JSON endpoints. The frontends
//! never build URLs or parse response bodies themselves; everything goes
//! through [`ApiClient`] and comes back as the types in [`models`] or as an
//! [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per backend endpoint, bearer auth |
//! | [`config`] | backend base URL resolution (`BACKEND_URL` at build time) |
//! | [`error`] | [`ApiError`] and the per-field error list serializers return |
//! | [`models`] | wire types: users, projects, postulations, notifications, stats |
//!
//! ## Conventions
//!
//! - Authenticated endpoints take the access token as an argument; the client
//!   holds no session state of its own.
//! - A 401 always maps to [`ApiError::Unauthorized`] so callers can clear the
//!   session and bounce to the login page in one place.
//! - DRF decimal and date fields stay `String` on the wire and in our models;
//!   the UI never does arithmetic on them.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ApiClient, FileUpload, NewProject, ProfileUpdate, RegistrationPayload};
pub use config::backend_url;
pub use error::{ApiError, FieldErrors};
pub use models::{
    Notification, PlatformStats, Postulation, PostulationStatus, Project, TokenResponse, User,
};
pub use session::UserRole;
