//! Applying the resolved preference to the document root.
//!
//! Downstream stylesheets select on a marker class on `<html>` and read the
//! `color-scheme` property; both are driven from here.
//!
//! Several contexts can be alive at once during a route change: the router
//! builds the incoming page before it disposes the outgoing one. Each context
//! claims the root when it mounts, and only the holder of the latest claim
//! may touch the root on teardown.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::preference::scheme_label;

pub trait DocumentRoot {
    fn apply(&self, light: bool);

    /// Take the root for a newly mounted context. The returned token stays
    /// current until a later claim supersedes it.
    fn claim(&self) -> u64;

    /// Whether `token` is still the latest claim.
    fn holds(&self, token: u64) -> bool;
}

/// Which class marks the root, and for which scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMarker {
    pub class: &'static str,
    /// `true` when the class is present for dark, `false` when for light.
    pub marks_dark: bool,
}

impl Default for RootMarker {
    fn default() -> Self {
        Self { class: "dark", marks_dark: true }
    }
}

impl RootMarker {
    /// Whether the marker class should be present for `light`.
    pub fn present_for(self, light: bool) -> bool {
        light != self.marks_dark
    }

    /// Value for the `color-scheme` style property.
    pub fn color_scheme(light: bool) -> &'static str {
        scheme_label(light)
    }
}

/// Root that only remembers what was applied. Used under SSR and in tests.
#[derive(Clone, Default)]
pub struct RecordingRoot {
    applied: Rc<RefCell<Vec<bool>>>,
    claims: Rc<Cell<u64>>,
}

impl RecordingRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<bool> {
        self.applied.borrow().clone()
    }

    pub fn last(&self) -> Option<bool> {
        self.applied.borrow().last().copied()
    }
}

impl DocumentRoot for RecordingRoot {
    fn apply(&self, light: bool) {
        self.applied.borrow_mut().push(light);
    }

    fn claim(&self) -> u64 {
        let token = self.claims.get() + 1;
        self.claims.set(token);
        token
    }

    fn holds(&self, token: u64) -> bool {
        self.claims.get() == token
    }
}
