//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes should apply identical signed-out redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::identity;
use crate::state::auth::AuthState;

/// Send the visitor to the hosted sign-in page whenever the session lookup
/// has settled with no user. The redirect action is injected so callers
/// off-browser can observe it instead of leaving the page.
pub fn install_signed_out_redirect<F>(auth: RwSignal<AuthState>, redirect: F)
where
    F: Fn(&str) + 'static,
{
    Effect::new(move || {
        if should_redirect_signed_out(&auth.get()) {
            redirect(&identity::sign_in_url());
        }
    });
}

/// Leave the app for `url` via a full document navigation. The sign-in
/// page lives on the identity provider's origin, outside the router.
pub fn browser_redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

fn should_redirect_signed_out(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}
