//! Data hooks: content fetches exposed as browser-local resources.
//!
//! Resources are local because the fetches only run after hydration; the
//! server renders the `Suspense` fallback.

use leptos::prelude::*;

use super::api::{self, ApiError};
use super::types::{Hero, Project};

pub fn use_hero() -> LocalResource<Result<Hero, ApiError>> {
    LocalResource::new(api::fetch_hero)
}

pub fn use_subheadings() -> LocalResource<Result<Vec<String>, ApiError>> {
    LocalResource::new(api::fetch_subheadings)
}

pub fn use_projects() -> LocalResource<Result<Vec<Project>, ApiError>> {
    LocalResource::new(api::fetch_projects)
}
