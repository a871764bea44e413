//! REST helpers behind the content data hooks.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `ApiError::Unavailable`, since these endpoints are
//! fetched by the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `Result` and decide how to degrade; a failed fetch
//! renders a placeholder instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{Hero, Project};

pub const HERO_PATH: &str = "/api/hero";
pub const SUBHEADINGS_PATH: &str = "/api/subheadings";
pub const PROJECTS_PATH: &str = "/api/projects";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map a non-success HTTP status to an error, passing 2xx through.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Fetch hero content from `/api/hero`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or a body
/// that does not match `Hero`.
pub async fn fetch_hero() -> Result<Hero, ApiError> {
    get_json(HERO_PATH).await
}

/// Fetch the rotating sub-headings from `/api/subheadings`.
///
/// # Errors
///
/// See [`fetch_hero`].
pub async fn fetch_subheadings() -> Result<Vec<String>, ApiError> {
    get_json(SUBHEADINGS_PATH).await
}

/// Fetch project cards from `/api/projects`.
///
/// # Errors
///
/// See [`fetch_hero`].
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    get_json(PROJECTS_PATH).await
}
