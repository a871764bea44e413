//! Durable storage for the user's explicit theme choice.
//!
//! ERROR HANDLING
//! ==============
//! Backends report failures as `StoreError`, but `PreferenceStore` never
//! propagates them: a disabled or full storage area is logged and treated as
//! "nothing stored" / "write skipped" so rendering is never interrupted.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::preference::{parse_scheme, scheme_label};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write for key {key}: {reason}")]
    Rejected { key: String, reason: String },
}

/// String key-value storage scoped to the application origin.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the storage area cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage area is unreachable or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Reads and writes the `"light"`/`"dark"` value under one fixed key.
pub struct PreferenceStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> PreferenceStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// Stored preference, or `None` when unset, malformed, or unreadable.
    pub fn read(&self) -> Option<bool> {
        let raw = match self.backend.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                leptos::logging::warn!("theme store read failed: key={} error={e}", self.key);
                return None;
            }
        };
        let parsed = parse_scheme(&raw);
        if parsed.is_none() {
            leptos::logging::debug_warn!("discarding malformed theme value: key={} value={raw:?}", self.key);
        }
        parsed
    }

    /// Persist an explicit choice. Failures are logged and dropped.
    pub fn write(&self, light: bool) {
        if let Err(e) = self.backend.set(&self.key, scheme_label(light)) {
            leptos::logging::warn!("theme store write failed: key={} error={e}", self.key);
        }
    }
}

/// In-process backend used for SSR and tests.
///
/// Clones share the same map, so one handle can be given to a context while
/// another inspects what was written.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: usize,
    failing: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value without counting it as a write.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .entries
            .insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make every subsequent `get`/`set` fail with `Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.inner.borrow_mut().failing = failing;
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let inner = self.inner.borrow();
        if inner.failing {
            return Err(StoreError::Unavailable);
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        if inner.failing {
            return Err(StoreError::Unavailable);
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        inner.writes += 1;
        Ok(())
    }
}
