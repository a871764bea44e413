//! Named configurations of the theme mechanism.
//!
//! The public site and the admin back-office each keep their own preference.
//! They differ only in storage key, whether the OS signal is followed, the
//! fallback when nothing is known, and what the document is left showing on
//! teardown.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use super::document::RootMarker;
use super::preference::Preference;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeScope {
    pub name: &'static str,
    pub storage_key: &'static str,
    /// Follow the OS/browser color-scheme signal while provenance is `System`.
    pub follows_system: bool,
    /// Value used when no stored value and no system signal are available.
    pub fallback_light: bool,
    /// Value re-applied to the document when the context is torn down, unless
    /// another context has mounted since.
    pub restore_on_teardown: Option<bool>,
    pub marker: RootMarker,
}

impl ThemeScope {
    /// Public site: follows the system, light when nothing is known.
    pub const fn site() -> Self {
        Self {
            name: "site",
            storage_key: "theme",
            follows_system: true,
            fallback_light: true,
            restore_on_teardown: None,
            marker: RootMarker { class: "dark", marks_dark: true },
        }
    }

    /// Admin back-office: dark by default, ignores the system, and hands the
    /// document back in light so the public site never inherits its marker.
    pub const fn admin() -> Self {
        Self {
            name: "admin",
            storage_key: "admin-theme",
            follows_system: false,
            fallback_light: false,
            restore_on_teardown: Some(true),
            marker: RootMarker { class: "dark", marks_dark: true },
        }
    }

    /// What the scope resolves to before any platform is consulted, which is
    /// also what server rendering shows.
    pub const fn unresolved(self) -> Preference {
        Preference::system(self.fallback_light)
    }
}

impl Default for ThemeScope {
    fn default() -> Self {
        Self::site()
    }
}
