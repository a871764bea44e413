//! `web-sys` implementations of the theme collaborators.
//!
//! Every platform call is feature-detected: a missing `localStorage`,
//! `matchMedia`, or document element degrades to "absent"/no-op instead of
//! failing hydration.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::context::ThemeParts;
use super::document::{DocumentRoot, RootMarker};
use super::scope::ThemeScope;
use super::signal::{Listener, SignalSource, Subscription};
use super::store::{StorageBackend, StoreError};
use super::sync::CrossTabSync;

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const CLAIM_ATTR: &str = "data-theme-claim";

/// Collaborators wired to the live browser window.
pub fn browser_parts(scope: ThemeScope) -> ThemeParts {
    ThemeParts {
        backend: Box::new(LocalStorageBackend),
        system: Box::new(MediaQuerySignal::prefers_dark()),
        external: Box::new(StorageEventSignal::new(scope.storage_key)),
        root: Box::new(HtmlRoot::new(scope.marker)),
    }
}

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
    }
}

/// OS/browser color-scheme preference, reported as "is light".
pub struct MediaQuerySignal {
    query: Option<web_sys::MediaQueryList>,
}

impl MediaQuerySignal {
    pub fn prefers_dark() -> Self {
        let query = web_sys::window().and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten());
        if query.is_none() {
            leptos::logging::debug_warn!("matchMedia unavailable; system theme signal disabled");
        }
        Self { query }
    }
}

impl SignalSource for MediaQuerySignal {
    fn current_value(&self) -> Option<bool> {
        self.query.as_ref().map(|q| !q.matches())
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let Some(query) = self.query.clone() else {
            return Subscription::detached();
        };
        let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |e: web_sys::MediaQueryListEvent| {
            listener(!e.matches());
        });
        if let Err(e) = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            leptos::logging::warn!("media query listener rejected: {e:?}");
            return Subscription::detached();
        }
        Subscription::new(move || {
            let _ = query.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        })
    }
}

/// `storage` events raised on this window by writes in other tabs.
pub struct StorageEventSignal {
    sync: CrossTabSync,
}

impl StorageEventSignal {
    pub fn new(key: &str) -> Self {
        Self { sync: CrossTabSync::new(key) }
    }
}

impl SignalSource for StorageEventSignal {
    fn current_value(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::detached();
        };
        let inner = self.sync.subscribe(listener);
        let sync = self.sync.clone();
        let callback = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |e: web_sys::StorageEvent| {
            sync.deliver(e.key().as_deref(), e.new_value().as_deref());
        });
        if let Err(e) = window.add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref()) {
            leptos::logging::warn!("storage listener rejected: {e:?}");
            return Subscription::detached();
        }
        Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
            drop(inner);
        })
    }
}

/// The `<html>` element.
pub struct HtmlRoot {
    marker: RootMarker,
}

impl HtmlRoot {
    pub fn new(marker: RootMarker) -> Self {
        Self { marker }
    }
}

fn document_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

fn current_claim(el: &web_sys::Element) -> u64 {
    el.get_attribute(CLAIM_ATTR)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0)
}

impl DocumentRoot for HtmlRoot {
    fn apply(&self, light: bool) {
        let Some(el) = document_element() else {
            return;
        };
        let _ = el
            .class_list()
            .toggle_with_force(self.marker.class, self.marker.present_for(light));
        if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html
                .style()
                .set_property("color-scheme", RootMarker::color_scheme(light));
        }
    }

    /// The claim counter lives on `<html>` itself so every context sees it.
    fn claim(&self) -> u64 {
        let Some(el) = document_element() else {
            return 0;
        };
        let token = current_claim(&el) + 1;
        let _ = el.set_attribute(CLAIM_ATTR, &token.to_string());
        token
    }

    fn holds(&self, token: u64) -> bool {
        document_element().is_none_or(|el| current_claim(&el) == token)
    }
}
