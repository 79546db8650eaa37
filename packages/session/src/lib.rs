//! # Session crate — persisted browser session for the marketplace client
//!
//! The backend hands out a JWT pair plus the account's role on login; this
//! crate is the single place where that state is persisted and read back.
//! Every authenticated API call starts by loading the [`Session`] from a
//! [`SessionStore`], and every logout/401 path ends by clearing it.
//!
//! ## Storage keys
//!
//! | Key | Holds |
//! |-----|-------|
//! | `accessToken` | bearer token attached to authenticated requests |
//! | `refreshToken` | refresh token (kept for the backend, never sent by this client) |
//! | `userType` | the resolved role string (`client`, `freelancer`, `administrateur`) |
//!
//! ## Backends
//!
//! - [`LocalStorage`] — `window.localStorage` via `web-sys`, used on the web
//!   platform (`web` feature, wasm32 only).
//! - [`MemoryStore`] — in-process map, used off-wasm and in tests.
//!
//! Both backends swallow storage errors: an unavailable or corrupted storage
//! degrades to "no session", which the UI treats as signed out.

use serde::{Deserialize, Serialize};

mod models;

pub mod memory;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use memory::MemoryStore;
pub use models::UserRole;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::LocalStorage;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_TYPE_KEY: &str = "userType";

/// Key/value storage for session state.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The persisted session: token pair plus the role returned by the token
/// endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// `None` when the stored role string is missing or unknown.
    pub user_type: Option<UserRole>,
}

impl Session {
    pub fn new(access_token: String, refresh_token: String, user_type: Option<UserRole>) -> Self {
        Self {
            access_token,
            refresh_token,
            user_type,
        }
    }

    /// Load the session from storage. Returns `None` when no access token is
    /// stored, which the client treats as signed out.
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let access_token = store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())?;
        let refresh_token = store.get(REFRESH_TOKEN_KEY).unwrap_or_default();
        let user_type = store
            .get(USER_TYPE_KEY)
            .and_then(|s| UserRole::parse(&s));
        Some(Self {
            access_token,
            refresh_token,
            user_type,
        })
    }

    /// Persist all three keys.
    pub fn save(&self, store: &impl SessionStore) {
        store.set(ACCESS_TOKEN_KEY, &self.access_token);
        store.set(REFRESH_TOKEN_KEY, &self.refresh_token);
        if let Some(role) = self.user_type {
            store.set(USER_TYPE_KEY, role.as_str());
        } else {
            store.remove(USER_TYPE_KEY);
        }
    }

    /// Remove all three keys. Used by logout and by every 401 path.
    pub fn clear(store: &impl SessionStore) {
        store.remove(ACCESS_TOKEN_KEY);
        store.remove(REFRESH_TOKEN_KEY);
        store.remove(USER_TYPE_KEY);
    }
}
