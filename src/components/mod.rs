//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render presentation surfaces while reading shared state from
//! Leptos context providers or receiving it through props.

pub mod creation_card;
pub mod hero;
pub mod toast_tray;
