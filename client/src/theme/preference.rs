//! Resolved light/dark preference and where it came from.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Persisted string for a light preference.
pub const LIGHT: &str = "light";
/// Persisted string for a dark preference.
pub const DARK: &str = "dark";

/// Origin of the value currently in effect.
///
/// Only `User` values are written to storage; `System` values always mirror
/// the last observed OS/browser signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Provenance {
    #[default]
    System,
    User,
}

/// The resolved preference: `light == true` means light, `false` means dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preference {
    pub light: bool,
    pub provenance: Provenance,
}

impl Preference {
    pub const fn system(light: bool) -> Self {
        Self { light, provenance: Provenance::System }
    }

    pub const fn user(light: bool) -> Self {
        Self { light, provenance: Provenance::User }
    }
}

/// `"light"` or `"dark"` for a resolved value.
pub fn scheme_label(light: bool) -> &'static str {
    if light { LIGHT } else { DARK }
}

/// Parse a persisted value. Anything other than the two exact labels is
/// rejected.
pub fn parse_scheme(raw: &str) -> Option<bool> {
    match raw {
        LIGHT => Some(true),
        DARK => Some(false),
        _ => None,
    }
}
