//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Seeded once from the token store when the app mounts. Identity-aware
//! components (the navbar email badge) read it; the token store stays the
//! source of truth for the route guard and the API client.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::token_store::Session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Email of the signed-in user, if any.
    pub email: Option<String>,
}

impl AuthState {
    pub fn from_session(session: Option<&Session>) -> Self {
        Self { email: session.map(|s| s.user_email.clone()) }
    }

    pub fn is_logged_in(&self) -> bool {
        self.email.is_some()
    }
}
