use super::*;
use crate::util::navigation::RecordingNavigator;
use crate::util::storage::MemoryStorage;

fn logged_in() -> TokenStore<MemoryStorage> {
    let store = TokenStore::new(MemoryStorage::new());
    store.save("tok1", "a@b.com");
    store
}

fn logged_out() -> TokenStore<MemoryStorage> {
    TokenStore::new(MemoryStorage::new())
}

// =============================================================
// Route classification
// =============================================================

#[test]
fn login_signup_and_root_are_public() {
    assert_eq!(classify_path("/"), RouteAccess::Public);
    assert_eq!(classify_path("/login"), RouteAccess::Public);
    assert_eq!(classify_path("/signup"), RouteAccess::Public);
}

#[test]
fn app_pages_are_protected() {
    assert_eq!(classify_path("/weather"), RouteAccess::Protected);
    assert_eq!(classify_path("/forecast"), RouteAccess::Protected);
}

#[test]
fn unknown_paths_are_protected() {
    assert_eq!(classify_path("/admin"), RouteAccess::Protected);
    assert_eq!(classify_path("/login/extra"), RouteAccess::Protected);
}

#[test]
fn trailing_slash_does_not_change_classification() {
    assert_eq!(classify_path("/login/"), RouteAccess::Public);
    assert_eq!(classify_path("/weather/"), RouteAccess::Protected);
    assert_eq!(classify_path(""), RouteAccess::Public);
}

// =============================================================
// Guard truth table
// =============================================================

#[test]
fn no_session_on_protected_page_redirects_to_login() {
    assert_eq!(evaluate_guard(false, RouteAccess::Protected), GuardAction::RedirectToLogin);
}

#[test]
fn no_session_on_public_page_stays() {
    assert_eq!(evaluate_guard(false, RouteAccess::Public), GuardAction::Stay);
}

#[test]
fn session_on_public_page_redirects_to_landing() {
    assert_eq!(evaluate_guard(true, RouteAccess::Public), GuardAction::RedirectToLanding);
}

#[test]
fn session_on_protected_page_stays() {
    assert_eq!(evaluate_guard(true, RouteAccess::Protected), GuardAction::Stay);
}

#[test]
fn redirect_targets_are_classified_opposite_to_source() {
    let login = GuardAction::RedirectToLogin.target().unwrap();
    let landing = GuardAction::RedirectToLanding.target().unwrap();
    assert_eq!(evaluate_guard(false, classify_path(login)), GuardAction::Stay);
    assert_eq!(evaluate_guard(true, classify_path(landing)), GuardAction::Stay);
}

// =============================================================
// run_guard
// =============================================================

#[test]
fn run_guard_navigates_logged_out_user_to_login() {
    let nav = RecordingNavigator::new();
    let action = run_guard(&logged_out(), LANDING_PATH, &nav);
    assert_eq!(action, GuardAction::RedirectToLogin);
    assert_eq!(nav.visits(), vec![LOGIN_PATH.to_owned()]);
}

#[test]
fn run_guard_navigates_logged_in_user_off_signup() {
    let nav = RecordingNavigator::new();
    let action = run_guard(&logged_in(), SIGNUP_PATH, &nav);
    assert_eq!(action, GuardAction::RedirectToLanding);
    assert_eq!(nav.last(), Some(LANDING_PATH.to_owned()));
}

#[test]
fn run_guard_stay_does_not_navigate() {
    let nav = RecordingNavigator::new();
    assert_eq!(run_guard(&logged_in(), FORECAST_PATH, &nav), GuardAction::Stay);
    assert_eq!(run_guard(&logged_out(), LOGIN_PATH, &nav), GuardAction::Stay);
    assert!(nav.visits().is_empty());
}

#[test]
fn run_guard_is_idempotent() {
    let store = logged_out();
    let nav = RecordingNavigator::new();
    let first = run_guard(&store, LANDING_PATH, &nav);
    let second = run_guard(&store, LANDING_PATH, &nav);
    assert_eq!(first, second);
    assert_eq!(nav.visits(), vec![LOGIN_PATH.to_owned(), LOGIN_PATH.to_owned()]);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_session_and_navigates() {
    let store = logged_in();
    let nav = RecordingNavigator::new();
    logout(&store, &nav);
    assert_eq!(store.read(), None);
    assert_eq!(nav.last(), Some(LOGIN_PATH.to_owned()));
}

#[test]
fn logout_without_session_still_navigates() {
    let store = logged_out();
    let nav = RecordingNavigator::new();
    logout(&store, &nav);
    assert_eq!(store.read(), None);
    assert_eq!(nav.visits(), vec![LOGIN_PATH.to_owned()]);
}
