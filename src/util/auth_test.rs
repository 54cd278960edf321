use super::*;
use crate::net::types::SessionUser;

#[test]
fn redirects_when_session_settled_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_signed_out(&state));
}

#[test]
fn does_not_redirect_while_session_is_unresolved() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_signed_out(&state));
}

#[test]
fn does_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(SessionUser { id: "u1".to_owned() }),
        loading: false,
    };
    assert!(!should_redirect_signed_out(&state));
}
