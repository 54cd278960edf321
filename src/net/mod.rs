//! Networking modules for the creations API and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches published creations, `identity` talks to the hosted
//! identity provider for sessions and tokens, `types` defines the shared
//! wire schema, and `error` carries the failure taxonomy for both.

pub mod api;
pub mod error;
pub mod identity;
pub mod types;
