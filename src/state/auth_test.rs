use super::*;

#[test]
fn default_starts_unresolved_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}
