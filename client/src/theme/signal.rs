//! Boolean signal sources feeding the theme state machine.
//!
//! DESIGN
//! ======
//! The OS color-scheme query and the cross-tab storage event are both
//! modeled as a `SignalSource`: an optional current value plus a change
//! subscription. The context never talks to browser APIs directly, so tests
//! substitute `ManualSignal` and SSR substitutes `FixedSignal`.
//!
//! Subscriptions are RAII handles; dropping one de-registers the listener.

#[cfg(test)]
#[path = "signal_test.rs"]
mod signal_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Callback invoked with each new signal value.
pub type Listener = Box<dyn Fn(bool)>;

pub trait SignalSource {
    /// Live value, or `None` when the platform lacks the capability.
    fn current_value(&self) -> Option<bool>;

    /// Register `listener` for future changes. The returned handle must be
    /// kept alive for as long as notifications are wanted.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

/// De-registration handle for a `SignalSource` listener.
#[must_use = "dropping a Subscription immediately de-registers the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release, for sources that cannot notify.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }

    /// De-register now instead of at drop.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// A source whose value never changes. Subscriptions are detached.
#[derive(Clone, Copy, Debug)]
pub struct FixedSignal(pub Option<bool>);

impl SignalSource for FixedSignal {
    fn current_value(&self) -> Option<bool> {
        self.0
    }

    fn subscribe(&self, _listener: Listener) -> Subscription {
        Subscription::detached()
    }
}

/// Programmatically driven source. Clones share listeners and value.
#[derive(Clone)]
pub struct ManualSignal {
    inner: Rc<RefCell<ManualInner>>,
}

struct ManualInner {
    value: Option<bool>,
    supported: bool,
    next_id: u64,
    listeners: Vec<(u64, Rc<dyn Fn(bool)>)>,
}

impl ManualSignal {
    pub fn new(value: Option<bool>) -> Self {
        Self::build(value, true)
    }

    /// A source that reports no capability: no value and detached
    /// subscriptions.
    pub fn unsupported() -> Self {
        Self::build(None, false)
    }

    fn build(value: Option<bool>, supported: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ManualInner {
                value,
                supported,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Update the current value and notify every registered listener.
    pub fn emit(&self, value: bool) {
        let listeners: Vec<Rc<dyn Fn(bool)>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = Some(value);
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(value);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl SignalSource for ManualSignal {
    fn current_value(&self) -> Option<bool> {
        self.inner.borrow().value
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            if !inner.supported {
                return Subscription::detached();
            }
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::from(listener)));
            id
        };
        let weak: Weak<RefCell<ManualInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}
