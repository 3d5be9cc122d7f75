//! Persisted access token and user email.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard reads this on every page load and the API client reads it
//! on every request. Login writes it; logout and any 401 response clear it.
//!
//! The token and email are written and removed together. A storage state with
//! only one of the two keys reads back as "no session", so a half-cleared
//! store is never observable as logged in.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use super::storage::{KeyValueStorage, LocalStorage};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_EMAIL_KEY: &str = "user_email";

/// A logged-in browser session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token issued by the backend.
    pub access_token: String,
    pub user_email: String,
}

/// Token persistence over a `KeyValueStorage` backend.
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S = LocalStorage> {
    storage: S,
}

impl<S: KeyValueStorage> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a session, replacing any previous one. The token is not
    /// inspected.
    ///
    /// The previous pair is removed first, so a write that fails part way
    /// leaves no session rather than a new token paired with an old email.
    pub fn save(&self, access_token: &str, user_email: &str) {
        self.clear();
        self.storage.set(ACCESS_TOKEN_KEY, access_token);
        self.storage.set(USER_EMAIL_KEY, user_email);
    }

    /// Current session, or `None` when logged out or storage is unavailable.
    pub fn read(&self) -> Option<Session> {
        let access_token = self.storage.get(ACCESS_TOKEN_KEY)?;
        let user_email = self.storage.get(USER_EMAIL_KEY)?;
        Some(Session { access_token, user_email })
    }

    pub fn has_session(&self) -> bool {
        self.read().is_some()
    }

    /// Remove both persisted values.
    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(USER_EMAIL_KEY);
    }
}
