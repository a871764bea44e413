//! JSON values in origin-scoped storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small UI memories (sidebar layout, dismissed notices) share the theme's
//! `StorageBackend`, so they degrade the same way when storage is disabled
//! and can be exercised with `MemoryBackend` in tests.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::theme::store::StorageBackend;

/// Load a JSON value stored under `key`. Missing, unreadable, or corrupt
/// entries yield `None`.
pub fn load_json<T: DeserializeOwned>(backend: &impl StorageBackend, key: &str) -> Option<T> {
    let raw = backend.get(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::debug_warn!("discarding corrupt stored value: key={key} error={e}");
            None
        }
    }
}

/// Save a JSON value under `key`. Failures are logged and dropped.
pub fn save_json<T: Serialize>(backend: &impl StorageBackend, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            leptos::logging::warn!("failed to encode stored value: key={key} error={e}");
            return;
        }
    };
    if let Err(e) = backend.set(key, &raw) {
        leptos::logging::warn!("failed to store value: key={key} error={e}");
    }
}

/// The browser's `localStorage` when hydrated, an empty in-memory store
/// otherwise.
#[cfg(feature = "hydrate")]
pub fn default_backend() -> crate::theme::browser::LocalStorageBackend {
    crate::theme::browser::LocalStorageBackend
}

#[cfg(not(feature = "hydrate"))]
pub fn default_backend() -> crate::theme::store::MemoryBackend {
    crate::theme::store::MemoryBackend::new()
}
