//! Admin sidebar layout that survives reloads.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use serde::{Deserialize, Serialize};

use super::persistence::{load_json, save_json};
use crate::theme::store::StorageBackend;

pub const SIDEBAR_KEY: &str = "admin-sidebar";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarState {
    pub collapsed: bool,
    /// Navigation sections currently expanded, in the order they were opened.
    pub open_sections: Vec<String>,
}

impl SidebarState {
    pub fn is_open(&self, section: &str) -> bool {
        self.open_sections.iter().any(|s| s == section)
    }
}

/// Sidebar state bound to a storage key. Every mutation is written through.
pub struct SidebarMemory<B> {
    backend: B,
    key: String,
    state: SidebarState,
}

impl<B: StorageBackend> SidebarMemory<B> {
    /// Restore the saved layout, or the default when nothing usable is stored.
    pub fn load(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = load_json(&backend, &key).unwrap_or_default();
        Self { backend, key, state }
    }

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.state.collapsed = !self.state.collapsed;
        self.save();
        self.state.collapsed
    }

    /// Open `section` if closed, close it if open. Returns whether it is now
    /// open.
    pub fn toggle_section(&mut self, section: &str) -> bool {
        let open = if self.state.is_open(section) {
            self.state.open_sections.retain(|s| s != section);
            false
        } else {
            self.state.open_sections.push(section.to_owned());
            true
        };
        self.save();
        open
    }

    fn save(&self) {
        save_json(&self.backend, &self.key, &self.state);
    }
}
