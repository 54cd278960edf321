//! Auth-session state for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and identity-aware rendering to coordinate sign-in
//! redirects and per-user like display.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Authentication state tracking the current user and session resolution.
#[derive(Clone, Debug)]
pub struct AuthState {
    /// Signed-in user, once the identity provider reports one.
    pub user: Option<SessionUser>,
    /// True until the startup session lookup settles. Guards must treat an
    /// unresolved session as "unknown", not as "signed out".
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}
