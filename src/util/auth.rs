//! Route classification, the page-load auth guard, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page calls `guard_page` with its own path before doing anything that
//! depends on the session. Public pages bounce a logged-in user to the landing
//! page; protected pages bounce a logged-out user to login. Each redirect
//! target is classified opposite to its source, so the guard cannot loop.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::navigation::{BrowserNavigator, Navigator};
use super::storage::{KeyValueStorage, LocalStorage};
use super::token_store::TokenStore;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
/// Authenticated landing page.
pub const LANDING_PATH: &str = "/weather";
pub const FORECAST_PATH: &str = "/forecast";

const PUBLIC_PATHS: [&str; 3] = [ROOT_PATH, LOGIN_PATH, SIGNUP_PATH];

/// Whether a page needs a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

/// Classify a path. Anything not explicitly public is protected.
pub fn classify_path(path: &str) -> RouteAccess {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { ROOT_PATH } else { trimmed };
    if PUBLIC_PATHS.contains(&normalized) {
        RouteAccess::Public
    } else {
        RouteAccess::Protected
    }
}

/// What the guard decided for a page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    Stay,
    RedirectToLogin,
    RedirectToLanding,
}

impl GuardAction {
    /// Navigation target, if any.
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Stay => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToLanding => Some(LANDING_PATH),
        }
    }

    pub fn is_redirect(self) -> bool {
        self != Self::Stay
    }
}

/// Pure guard decision over session presence and page access.
pub fn evaluate_guard(has_session: bool, access: RouteAccess) -> GuardAction {
    match (has_session, access) {
        (false, RouteAccess::Protected) => GuardAction::RedirectToLogin,
        (true, RouteAccess::Public) => GuardAction::RedirectToLanding,
        (false, RouteAccess::Public) | (true, RouteAccess::Protected) => GuardAction::Stay,
    }
}

/// Evaluate the guard for `path` and navigate when it asks for a redirect.
pub fn run_guard<S, N>(store: &TokenStore<S>, path: &str, navigator: &N) -> GuardAction
where
    S: KeyValueStorage,
    N: Navigator,
{
    let action = evaluate_guard(store.has_session(), classify_path(path));
    if let Some(target) = action.target() {
        leptos::logging::log!("auth guard: {path} -> {target}");
        navigator.navigate(target);
    }
    action
}

/// Run the guard for the current page against browser storage.
pub fn guard_page(path: &str) -> GuardAction {
    run_guard(&TokenStore::new(LocalStorage), path, &BrowserNavigator)
}

/// Drop the local session and go to login. No backend call is made.
pub fn logout<S, N>(store: &TokenStore<S>, navigator: &N)
where
    S: KeyValueStorage,
    N: Navigator,
{
    store.clear();
    navigator.navigate(LOGIN_PATH);
}
