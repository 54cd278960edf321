//! Compile-time configuration for remote collaborator base URLs.
//!
//! A client-side WASM build has no process environment at runtime, so both
//! base URLs are captured when the crate is compiled. Unset variables fall
//! back to the empty string, which keeps every request same-origin and lets
//! a reverse proxy route `/api` and the identity paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the creations API, from `ATELIER_API_BASE` at build time.
pub fn api_base() -> &'static str {
    option_env!("ATELIER_API_BASE").unwrap_or("")
}

/// Base URL of the hosted identity provider, from `ATELIER_IDENTITY_BASE`
/// at build time.
pub fn identity_base() -> &'static str {
    option_env!("ATELIER_IDENTITY_BASE").unwrap_or("")
}

/// Join a base URL and a rooted path without doubling the separator.
///
/// `path` must start with `/`. An empty base yields a same-origin relative
/// URL.
pub fn join(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
