//! Theme state machine: resolved preference plus provenance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three event sources drive transitions: explicit user calls (`toggle`,
//! `set_light`), the OS color-scheme signal, and writes from other tabs.
//! Every transition re-applies the document marker and notifies observers;
//! only explicit user calls write through to storage.
//!
//! DESIGN
//! ======
//! State lives in an `Rc` shared with the signal listeners, which hold only
//! a `Weak` to it. Dropping the context drops the subscriptions, so no
//! listener outlives the mounted root. No `RefCell` borrow is held while
//! collaborators or observers run, so observers may call back in.
//!
//! A scope's teardown value is applied only while the context still holds
//! the root's latest claim; a page mounted after it owns the document.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::document::{DocumentRoot, RecordingRoot};
use super::preference::{Preference, Provenance};
use super::scope::ThemeScope;
use super::signal::{FixedSignal, SignalSource, Subscription};
use super::store::{MemoryBackend, PreferenceStore, StorageBackend};

/// Collaborators a context is assembled from.
pub struct ThemeParts {
    pub backend: Box<dyn StorageBackend>,
    pub system: Box<dyn SignalSource>,
    pub external: Box<dyn SignalSource>,
    pub root: Box<dyn DocumentRoot>,
}

impl ThemeParts {
    /// Collaborators with no platform behind them: in-memory storage, no
    /// signals, and a recording root. Used for server rendering.
    pub fn inert() -> Self {
        Self {
            backend: Box::new(MemoryBackend::new()),
            system: Box::new(FixedSignal(None)),
            external: Box::new(FixedSignal(None)),
            root: Box::new(RecordingRoot::new()),
        }
    }
}

type Observer = Rc<dyn Fn(Preference)>;

struct Shared {
    scope: ThemeScope,
    store: PreferenceStore<Box<dyn StorageBackend>>,
    root: Box<dyn DocumentRoot>,
    state: Cell<Preference>,
    next_observer: Cell<u64>,
    observers: RefCell<Vec<(u64, Observer)>>,
}

impl Shared {
    fn transition(&self, next: Preference, persist: bool) {
        self.state.set(next);
        if persist {
            self.store.write(next.light);
        }
        self.root.apply(next.light);

        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, o)| Rc::clone(o))
            .collect();
        for observer in observers {
            observer(next);
        }
    }

    fn system_changed(&self, light: bool) {
        if self.state.get().provenance != Provenance::System {
            return;
        }
        self.transition(Preference::system(light), false);
    }

    fn external_changed(&self, light: bool) {
        self.transition(Preference::user(light), false);
    }
}

/// The mounted theme for one scope.
pub struct ThemeContext {
    shared: Rc<Shared>,
    subscriptions: Vec<Subscription>,
    claim: u64,
}

impl ThemeContext {
    /// Resolve the initial preference, apply it, and start listening.
    ///
    /// A stored value wins and is tagged `User`. Otherwise the live system
    /// value is used with `System` provenance, or the scope fallback when
    /// the platform cannot report one.
    pub fn new(scope: ThemeScope, parts: ThemeParts) -> Self {
        let ThemeParts { backend, system, external, root } = parts;
        let store = PreferenceStore::new(backend, scope.storage_key);

        let initial = match store.read() {
            Some(light) => Preference::user(light),
            None => {
                let live = if scope.follows_system { system.current_value() } else { None };
                Preference::system(live.unwrap_or(scope.fallback_light))
            }
        };

        let shared = Rc::new(Shared {
            scope,
            store,
            root,
            state: Cell::new(initial),
            next_observer: Cell::new(0),
            observers: RefCell::new(Vec::new()),
        });
        let claim = shared.root.claim();
        shared.root.apply(initial.light);

        let mut subscriptions = Vec::with_capacity(2);
        if scope.follows_system {
            let weak = Rc::downgrade(&shared);
            subscriptions.push(system.subscribe(Box::new(move |light| {
                if let Some(shared) = weak.upgrade() {
                    shared.system_changed(light);
                }
            })));
        }
        let weak = Rc::downgrade(&shared);
        subscriptions.push(external.subscribe(Box::new(move |light| {
            if let Some(shared) = weak.upgrade() {
                shared.external_changed(light);
            }
        })));

        Self { shared, subscriptions, claim }
    }

    pub fn preference(&self) -> Preference {
        self.shared.state.get()
    }

    pub fn is_light(&self) -> bool {
        self.preference().light
    }

    pub fn provenance(&self) -> Provenance {
        self.preference().provenance
    }

    /// Flip the resolved value and record it as the user's choice.
    pub fn toggle(&self) {
        let light = !self.is_light();
        self.shared.transition(Preference::user(light), true);
    }

    /// Record an explicit choice.
    pub fn set_light(&self, light: bool) {
        self.shared.transition(Preference::user(light), true);
    }

    /// Call `observer` after every transition. Dropping the returned handle
    /// removes it.
    pub fn observe(&self, observer: impl Fn(Preference) + 'static) -> Subscription {
        let id = self.shared.next_observer.get();
        self.shared.next_observer.set(id + 1);
        self.shared
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));

        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.observers.borrow_mut().retain(|(oid, _)| *oid != id);
            }
        })
    }

    /// Number of live signal subscriptions held by this context.
    pub fn attached_signals(&self) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.is_attached())
            .count()
    }
}

impl Drop for ThemeContext {
    fn drop(&mut self) {
        self.subscriptions.clear();
        if let Some(light) = self.shared.scope.restore_on_teardown {
            if self.shared.root.holds(self.claim) {
                self.shared.root.apply(light);
            }
        }
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("scope", &self.shared.scope.name)
            .field("preference", &self.preference())
            .finish_non_exhaustive()
    }
}
