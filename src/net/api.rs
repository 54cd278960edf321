//! REST helpers for the creations API.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed [`ApiError`] results instead of panics so fetch
//! failures degrade to a notification without crashing rendering.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config;
use crate::net::error::ApiError;
use crate::net::types::CreationsEnvelope;

fn published_creations_endpoint(base: &str) -> String {
    config::join(base, "/api/user/get-published-creations")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fetch the community's published creations.
///
/// The bearer token is minted per call by the identity provider and never
/// cached here. An envelope with `success: false` is a valid response at
/// this layer; the caller decides how to surface it.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the server answers with
/// a non-success status, or the body cannot be decoded.
pub async fn fetch_published_creations(token: &str) -> Result<CreationsEnvelope, ApiError> {
    let url = published_creations_endpoint(config::api_base());
    let resp = gloo_net::http::Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<CreationsEnvelope>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
