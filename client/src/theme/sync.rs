//! Cross-tab reconciliation of the persisted preference.
//!
//! Another tab writing the key is, by construction, a user action there, so
//! every accepted value is adopted locally with `User` provenance. Events for
//! other keys, cleared keys, and values other than `"light"`/`"dark"` are
//! dropped.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use super::preference::parse_scheme;
use super::signal::{Listener, ManualSignal, SignalSource, Subscription};

/// Filter one storage-change notification down to a preference value.
///
/// `event_key` is `None` when the whole storage area was cleared.
pub fn parse_external_change(watched_key: &str, event_key: Option<&str>, new_value: Option<&str>) -> Option<bool> {
    if event_key? != watched_key {
        return None;
    }
    parse_scheme(new_value?)
}

/// Fan-out point for storage-change notifications about one key.
///
/// Platform glue calls `deliver` with each raw event; subscribers only see
/// values that pass `parse_external_change`.
#[derive(Clone)]
pub struct CrossTabSync {
    key: String,
    changes: ManualSignal,
}

impl CrossTabSync {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            changes: ManualSignal::new(None),
        }
    }

    /// Feed one raw storage event. Returns the accepted value, if any.
    pub fn deliver(&self, event_key: Option<&str>, new_value: Option<&str>) -> Option<bool> {
        let Some(light) = parse_external_change(&self.key, event_key, new_value) else {
            if event_key == Some(self.key.as_str()) {
                leptos::logging::debug_warn!("ignoring external theme value: {new_value:?}");
            }
            return None;
        };
        self.changes.emit(light);
        Some(light)
    }

    pub fn listener_count(&self) -> usize {
        self.changes.listener_count()
    }
}

impl SignalSource for CrossTabSync {
    /// External writes have no standing value; only changes matter.
    fn current_value(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.changes.subscribe(listener)
    }
}
