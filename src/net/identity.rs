//! Client for the hosted identity provider.
//!
//! The provider owns the whole credential flow: sign-in happens on its
//! hosted page, the active session is looked up once at startup, and a
//! fresh short-lived bearer token is minted for each authorized API call.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::Deserialize;

use crate::config;
use crate::net::error::ApiError;
use crate::net::types::SessionUser;

fn session_user_endpoint(base: &str) -> String {
    config::join(base, "/v1/session/user")
}

fn session_token_endpoint(base: &str) -> String {
    config::join(base, "/v1/session/token")
}

fn sign_in_target(base: &str) -> String {
    config::join(base, "/sign-in")
}

/// URL of the provider's hosted sign-in page.
pub fn sign_in_url() -> String {
    sign_in_target(config::identity_base())
}

/// Look up the currently signed-in user at the provider.
/// Returns `None` when there is no active session or the lookup fails.
pub async fn fetch_session_user() -> Option<SessionUser> {
    let url = session_user_endpoint(config::identity_base());
    let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<SessionUser>().await.ok()
}

#[derive(Debug, Deserialize)]
struct SessionTokenResponse {
    token: String,
}

/// Mint a short-lived bearer token for one outbound API request.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the provider answers
/// with a non-success status, or the body cannot be decoded.
pub async fn mint_session_token() -> Result<String, ApiError> {
    let url = session_token_endpoint(config::identity_base());
    let resp = gloo_net::http::Request::post(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body: SessionTokenResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.token)
}
