//! Public landing page: hero, rotating sub-heading, and project cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content comes from the data hooks after hydration. Motion (typewriter,
//! reveal-on-scroll) is scaled down by the device capability heuristic.

use leptos::prelude::*;

use crate::net::hooks::{use_hero, use_projects, use_subheadings};
use crate::net::types::{Hero, Project, featured_first};
use crate::theme::{ThemeProvider, ThemeToggle};
use crate::util::device::{DeviceHints, MotionBudget};
use crate::util::typewriter::{DEFAULT_HOLD_TICKS, DEFAULT_TICK_MS, use_typewriter};
use crate::util::visibility::{VisibilityLatch, use_in_view};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <ThemeProvider>
            <Home/>
        </ThemeProvider>
    }
}

#[component]
fn Home() -> impl IntoView {
    let hero = use_hero();
    let subheadings = use_subheadings();
    let projects = use_projects();
    let budget = DeviceHints::detect().motion_budget();

    let projects_ref = NodeRef::<leptos::html::Section>::new();
    let projects_visible = use_in_view(projects_ref, VisibilityLatch::default());
    let reveal = move || budget == MotionBudget::Minimal || projects_visible.get();

    view! {
        <header class="site-header">
            <ThemeToggle/>
        </header>
        <main>
            <section class="hero">
                <Suspense fallback=|| view! { <p class="hero__loading">"Loading..."</p> }>
                    {move || Suspend::new(async move {
                        match hero.await {
                            Ok(hero) => view! { <HeroBlock hero/> }.into_any(),
                            Err(e) => {
                                leptos::logging::warn!("hero fetch failed: {e}");
                                view! { <p class="hero__error">"Content is unavailable right now."</p> }.into_any()
                            }
                        }
                    })}
                </Suspense>
                <Suspense fallback=|| ()>
                    {move || Suspend::new(async move {
                        let phrases = subheadings.await.unwrap_or_default();
                        view! { <Subheading phrases budget/> }
                    })}
                </Suspense>
            </section>
            <section
                class="projects"
                class:revealed=reveal
                node_ref=projects_ref
            >
                <h2>"Projects"</h2>
                <Suspense fallback=|| view! { <p>"Loading projects..."</p> }>
                    {move || Suspend::new(async move {
                        match projects.await {
                            Ok(projects) => view! { <ProjectGrid projects/> }.into_any(),
                            Err(e) => {
                                leptos::logging::warn!("projects fetch failed: {e}");
                                view! { <p class="projects__error">"Projects are unavailable right now."</p> }.into_any()
                            }
                        }
                    })}
                </Suspense>
            </section>
        </main>
    }
}

#[component]
fn HeroBlock(hero: Hero) -> impl IntoView {
    let Hero { name, title, tagline, avatar_url, links } = hero;
    view! {
        {avatar_url.map(|src| view! { <img class="hero__avatar" src=src alt=""/> })}
        <h1 class="hero__name">{name}</h1>
        <p class="hero__title">{title}</p>
        <p class="hero__tagline">{tagline}</p>
        <nav class="hero__links">
            {links
                .into_iter()
                .map(|link| view! { <a href=link.href>{link.label}</a> })
                .collect_view()}
        </nav>
    }
}

/// Rotating sub-heading; static first phrase when motion is minimal.
#[component]
fn Subheading(phrases: Vec<String>, budget: MotionBudget) -> impl IntoView {
    if budget == MotionBudget::Minimal {
        let first = phrases.into_iter().next().unwrap_or_default();
        return view! { <p class="hero__subheading">{first}</p> }.into_any();
    }
    let text = use_typewriter(phrases, DEFAULT_TICK_MS, DEFAULT_HOLD_TICKS);
    view! {
        <p class="hero__subheading">
            {move || text.get()}
            <span class="hero__caret" aria-hidden="true">"|"</span>
        </p>
    }
    .into_any()
}

#[component]
fn ProjectGrid(projects: Vec<Project>) -> impl IntoView {
    let cards = featured_first(&projects)
        .into_iter()
        .cloned()
        .map(|project| view! { <ProjectCard project/> })
        .collect_view();
    view! { <div class="projects__grid">{cards}</div> }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project { title, summary, tags, repo_url, live_url, featured, .. } = project;
    view! {
        <article class="project-card" class:featured=featured>
            <h3>{title}</h3>
            <p>{summary}</p>
            <ul class="project-card__tags">
                {tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
            </ul>
            {repo_url.map(|href| view! { <a href=href>"Source"</a> })}
            {live_url.map(|href| view! { <a href=href>"Live"</a> })}
        </article>
    }
}
