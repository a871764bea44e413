//! Light/dark theme preference: resolution, persistence, and reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeContext` is the state machine. It depends on four collaborators
//! behind traits (`StorageBackend`, two `SignalSource`s, `DocumentRoot`) so
//! the same logic runs in the browser (`browser`, hydrate only), on the
//! server (inert parts), and under `cargo test` (in-memory doubles).

pub mod context;
pub mod document;
pub mod preference;
pub mod provider;
pub mod scope;
pub mod signal;
pub mod store;
pub mod sync;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use context::{ThemeContext, ThemeParts};
pub use preference::{Preference, Provenance};
pub use provider::{ThemeHandle, ThemeProvider, ThemeToggle, use_theme};
pub use scope::ThemeScope;
