//! Shared application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each concern lives in its own plain struct held inside one `RwSignal`
//! created at the application root. Components receive the signals through
//! context (or props, for testable helpers) rather than reaching for
//! module-level globals, so every consumer has an injectable seam.

pub mod auth;
pub mod creations;
pub mod toasts;
