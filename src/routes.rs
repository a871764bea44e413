//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the content endpoints the client data hooks call and stitches them
//! with Leptos SSR rendering under a single Axum router. Compiled WASM/CSS
//! assets are served from the Leptos site root under `/pkg`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use client::net::api::{HERO_PATH, PROJECTS_PATH, SUBHEADINGS_PATH};
use client::net::types::{Hero, Project};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Content endpoints consumed by the client data hooks.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(HERO_PATH, get(hero))
        .route(SUBHEADINGS_PATH, get(subheadings))
        .route(PROJECTS_PATH, get(projects))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn hero(State(state): State<AppState>) -> Json<Hero> {
    Json(state.content.hero.clone())
}

async fn subheadings(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.content.subheadings.clone())
}

async fn projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.content.projects.clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// API routes + Leptos SSR + `/pkg` assets, with request tracing and gzip.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
