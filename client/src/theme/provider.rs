//! Leptos binding for the theme state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeProvider` owns one `ThemeContext` per mounted scope and exposes it
//! to descendants as a `Copy` `ThemeHandle`. The context itself is
//! single-threaded (`Rc`), so it is kept in local arena storage; a mirrored
//! `RwSignal<Preference>` carries reactivity to views.
//!
//! On the server the context is built from inert parts, so SSR always
//! renders `ThemeScope::unresolved`. Hydration does not rewrite server text
//! or attributes, so in the browser the mirrored signal starts from that same
//! value and an effect copies the resolved preference in once hydration is
//! done.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;

use super::context::{ThemeContext, ThemeParts};
use super::preference::Preference;
use super::scope::ThemeScope;
use super::signal::Subscription;

/// Reactive, copyable access to the mounted theme.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    context: StoredValue<ThemeContext, LocalStorage>,
    observer: StoredValue<Subscription, LocalStorage>,
    preference: RwSignal<Preference>,
}

impl ThemeHandle {
    /// Wrap `context`, mirroring every transition into a signal.
    pub fn new(context: ThemeContext) -> Self {
        let shown = context.preference();
        Self::with_shown(context, shown)
    }

    /// Like `new`, but views start from `shown` until `resync`.
    fn with_shown(context: ThemeContext, shown: Preference) -> Self {
        let preference = RwSignal::new(shown);
        let observer = context.observe(move |p| preference.set(p));
        Self {
            context: StoredValue::new_local(context),
            observer: StoredValue::new_local(observer),
            preference,
        }
    }

    /// Build the platform collaborators for `scope` and mount a context.
    pub fn mount(scope: ThemeScope) -> Self {
        let handle = Self::with_shown(ThemeContext::new(scope, platform_parts(scope)), scope.unresolved());
        #[cfg(feature = "hydrate")]
        Effect::new(move |_| handle.resync());
        handle
    }

    /// Copy the context's resolved preference into the signal.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn resync(&self) {
        self.preference.set(self.context.with_value(ThemeContext::preference));
    }

    /// Tracked read of the resolved preference.
    pub fn preference(&self) -> Preference {
        self.preference.get()
    }

    pub fn is_light(&self) -> bool {
        self.preference().light
    }

    pub fn toggle(&self) {
        self.context.with_value(ThemeContext::toggle);
    }

    pub fn set_light(&self, light: bool) {
        self.context.with_value(|ctx| ctx.set_light(light));
    }

    /// Drop the context now, releasing its listeners.
    pub fn dispose(self) {
        self.observer.dispose();
        self.context.dispose();
    }
}

#[cfg(feature = "hydrate")]
fn platform_parts(scope: ThemeScope) -> ThemeParts {
    super::browser::browser_parts(scope)
}

#[cfg(not(feature = "hydrate"))]
fn platform_parts(_scope: ThemeScope) -> ThemeParts {
    ThemeParts::inert()
}

/// The nearest mounted theme.
///
/// # Panics
///
/// Panics if no `ThemeProvider` is an ancestor.
pub fn use_theme() -> ThemeHandle {
    expect_context::<ThemeHandle>()
}

/// Mount the theme for `scope` (site by default) around `children`.
#[component]
pub fn ThemeProvider(#[prop(optional)] scope: Option<ThemeScope>, children: Children) -> impl IntoView {
    let handle = ThemeHandle::mount(scope.unwrap_or_default());
    provide_context(handle);
    on_cleanup(move || handle.dispose());
    children()
}

fn toggle_glyph(light: bool) -> &'static str {
    if light { "\u{263E}" } else { "\u{2600}" }
}

fn toggle_title(light: bool) -> &'static str {
    if light { "Switch to dark theme" } else { "Switch to light theme" }
}

/// Button flipping the nearest theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="btn theme-toggle"
            title=move || toggle_title(theme.is_light())
            on:click=move |_| theme.toggle()
        >
            {move || toggle_glyph(theme.is_light())}
        </button>
    }
}
