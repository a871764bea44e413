//! Admin back-office shell: own theme scope plus a persisted sidebar.

use leptos::prelude::*;

use crate::theme::{ThemeProvider, ThemeScope, ThemeToggle};
use crate::util::persistence::default_backend;
use crate::util::sidebar::{SIDEBAR_KEY, SidebarMemory, SidebarState};

/// Sidebar sections and the management screens under each.
const SECTIONS: &[(&str, &[&str])] = &[
    ("content", &["Projects", "Blog", "Skills"]),
    ("inbox", &["Messages"]),
    ("account", &["Profile"]),
];

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <ThemeProvider scope=ThemeScope::admin()>
            <AdminShell/>
        </ThemeProvider>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    let memory = StoredValue::new_local(SidebarMemory::load(default_backend(), SIDEBAR_KEY));
    let sidebar = RwSignal::new(memory.with_value(|m| m.state().clone()));
    let sync = move || sidebar.set(memory.with_value(|m| m.state().clone()));

    let on_collapse = move |_| {
        memory.update_value(|m| {
            m.toggle_collapsed();
        });
        sync();
    };

    view! {
        <div class="admin" class:collapsed=move || sidebar.get().collapsed>
            <aside class="admin__sidebar">
                <button class="btn admin__collapse" on:click=on_collapse title="Collapse sidebar">
                    {move || if sidebar.get().collapsed { "\u{203A}" } else { "\u{2039}" }}
                </button>
                {SECTIONS
                    .iter()
                    .map(|&(section, screens)| {
                        let on_toggle = move |_| {
                            memory.update_value(|m| {
                                m.toggle_section(section);
                            });
                            sync();
                        };
                        let open = move || sidebar.with(|s: &SidebarState| s.is_open(section));
                        view! {
                            <div class="admin__section" class:open=open>
                                <button class="admin__section-title" on:click=on_toggle>
                                    {section}
                                </button>
                                <Show when=open>
                                    <ul>
                                        {screens.iter().map(|screen| view! { <li>{*screen}</li> }).collect_view()}
                                    </ul>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </aside>
            <main class="admin__main">
                <header class="admin__header">
                    <h1>"Dashboard"</h1>
                    <ThemeToggle/>
                </header>
            </main>
        </div>
    }
}
