//! Networking for the content REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `hooks` wraps them as Leptos resources for
//! views, and `types` defines the shared content schema.

pub mod api;
pub mod hooks;
pub mod types;
