//! "Has this section scrolled into view?" for reveal-on-scroll effects.
//!
//! The decision is a small latch over intersection ratios; the browser hook
//! feeds it from an `IntersectionObserver`. Where the observer API is
//! missing, elements are reported visible immediately so content is never
//! left hidden.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    once: bool,
    visible: bool,
}

impl VisibilityLatch {
    /// `threshold` is clamped to `0.0..=1.0`. With `once`, the first visible
    /// observation sticks.
    pub fn new(threshold: f64, once: bool) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            once,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_settled(&self) -> bool {
        self.once && self.visible
    }

    /// Record one observed intersection ratio and return the new state.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.is_settled() {
            return true;
        }
        self.visible = ratio > 0.0 && ratio >= self.threshold;
        self.visible
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(0.1, true)
    }
}

/// Track whether `target` is in view.
pub fn use_in_view(target: NodeRef<leptos::html::Section>, latch: VisibilityLatch) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    #[cfg(feature = "hydrate")]
    {
        observe_node(target, latch, set_visible);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, latch, set_visible);
    }
    visible
}

#[cfg(feature = "hydrate")]
fn observe_node(target: NodeRef<leptos::html::Section>, latch: VisibilityLatch, set_visible: WriteSignal<bool>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let observer_slot: StoredValue<Option<(web_sys::IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        if observer_slot.with_value(Option::is_some) {
            return;
        }

        let latch = Rc::new(RefCell::new(latch));
        let callback = {
            let latch = Rc::clone(&latch);
            Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let visible = latch.borrow_mut().observe(entry.intersection_ratio());
                    set_visible.set(visible);
                }
            })
        };

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(latch.borrow().threshold));
        match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                observer_slot.set_value(Some((observer, callback)));
            }
            Err(e) => {
                leptos::logging::debug_warn!("IntersectionObserver unavailable: {e:?}");
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer_slot.update_value(|slot| {
            if let Some((observer, _callback)) = slot.take() {
                observer.disconnect();
            }
        });
    });
}
