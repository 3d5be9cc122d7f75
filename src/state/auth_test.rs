use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.email.is_none());
    assert!(!state.is_logged_in());
}

#[test]
fn auth_state_from_session_takes_email() {
    let session = Session { access_token: "tok1".to_owned(), user_email: "a@b.com".to_owned() };
    let state = AuthState::from_session(Some(&session));
    assert_eq!(state.email.as_deref(), Some("a@b.com"));
    assert!(state.is_logged_in());
}

#[test]
fn auth_state_from_no_session_is_logged_out() {
    assert_eq!(AuthState::from_session(None), AuthState::default());
}
