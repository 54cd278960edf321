//! # atelier-web
//!
//! Browser client for the Atelier AI content studio, built with Leptos and
//! compiled to WebAssembly. It serves two routes: a marketing landing page
//! and the community gallery of published creations. Content generation,
//! persistence, and session issuance all live behind remote collaborators
//! (the creations API and a hosted identity provider); this crate renders,
//! fetches, and keeps per-tab state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
