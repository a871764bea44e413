//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Content is immutable after startup, so it is shared behind an `Arc`
//! without locking.

use std::sync::Arc;

use crate::content::Content;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<Content>,
}

impl AppState {
    pub fn new(content: Content) -> Self {
        Self { content: Arc::new(content) }
    }
}
