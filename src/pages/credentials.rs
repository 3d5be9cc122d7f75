//! Login and signup submission flows shared by the credential pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own the form signals and the busy flag; these helpers own input
//! validation, the backend call, token persistence, and which page to open
//! next. A successful flow returns a delayed redirect so the success message
//! stays visible briefly before the page changes.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::time::Duration;

use crate::net::api;
use crate::net::http::{ApiClient, Transport};
use crate::util::auth::{LANDING_PATH, LOGIN_PATH};
use crate::util::config::{LOGIN_REDIRECT_DELAY, SIGNUP_REDIRECT_DELAY};
use crate::util::navigation::Navigator;
use crate::util::storage::KeyValueStorage;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MISSING_LOGIN_FIELDS: &str = "Enter both email and password.";
pub const MISSING_EMAIL: &str = "Enter an email first.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters!";

/// A navigation to issue after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledRedirect {
    pub path: &'static str,
    pub delay: Duration,
}

/// Result of submitting a credential form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    Success { message: String, redirect: ScheduledRedirect },
    /// Shown inline next to the form; the submit button is re-enabled.
    Failure(String),
}

/// Require both login fields. A whitespace-only email counts as empty; the
/// email is otherwise sent exactly as entered.
///
/// # Errors
///
/// Returns a user-facing message when either field is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<String, &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(MISSING_LOGIN_FIELDS);
    }
    Ok(email.to_owned())
}

/// Check signup fields before any network call: email present, passwords
/// match, then minimum length.
///
/// # Errors
///
/// Returns the first failing check's user-facing message.
pub fn validate_signup_input(email: &str, password: &str, confirm: &str) -> Result<String, &'static str> {
    if email.trim().is_empty() {
        return Err(MISSING_EMAIL);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(email.to_owned())
}

/// Log in, persist the session, and redirect to the landing page.
pub async fn submit_login<S, T, N>(client: &ApiClient<S, T, N>, email: &str, password: &str) -> FlowOutcome
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    let email = match validate_login_input(email, password) {
        Ok(email) => email,
        Err(message) => return FlowOutcome::Failure(message.to_owned()),
    };
    match api::login(client, &email, password).await {
        Ok(resp) => {
            client.token_store().save(&resp.access_token, &resp.email);
            leptos::logging::log!("logged in as {}", resp.email);
            FlowOutcome::Success {
                message: non_empty_or(resp.message, "Login successful!"),
                redirect: ScheduledRedirect { path: LANDING_PATH, delay: LOGIN_REDIRECT_DELAY },
            }
        }
        Err(err) => FlowOutcome::Failure(err.to_string()),
    }
}

/// Create an account and redirect to login. No session is stored.
pub async fn submit_signup<S, T, N>(
    client: &ApiClient<S, T, N>,
    email: &str,
    password: &str,
    confirm: &str,
) -> FlowOutcome
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    let email = match validate_signup_input(email, password, confirm) {
        Ok(email) => email,
        Err(message) => return FlowOutcome::Failure(message.to_owned()),
    };
    match api::signup(client, &email, password).await {
        Ok(resp) => FlowOutcome::Success {
            message: non_empty_or(resp.message, "Account created! Redirecting to login..."),
            redirect: ScheduledRedirect { path: LOGIN_PATH, delay: SIGNUP_REDIRECT_DELAY },
        },
        Err(err) => FlowOutcome::Failure(err.to_string()),
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}

/// Navigate to `redirect.path` once `redirect.delay` has passed.
pub fn schedule_redirect<N>(redirect: ScheduledRedirect, navigator: N)
where
    N: Navigator + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(redirect.delay).await;
        navigator.navigate(redirect.path);
    });
    #[cfg(not(feature = "hydrate"))]
    navigator.navigate(redirect.path);
}
