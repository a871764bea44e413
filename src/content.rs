//! Portfolio content loaded once at startup.
//!
//! DESIGN
//! ======
//! Content is a single YAML document using the client's DTOs, so the
//! endpoints serve exactly the shapes the data hooks decode.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use client::net::types::{Hero, Project};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate project id: {0}")]
    DuplicateProject(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Content {
    pub hero: Hero,
    #[serde(default)]
    pub subheadings: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Content {
    /// Read and validate a content file.
    ///
    /// # Errors
    ///
    /// Returns a `ContentError` if the file cannot be read, is not valid
    /// YAML for `Content`, or repeats a project id.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    /// Parse and validate content from a YAML string.
    ///
    /// # Errors
    ///
    /// See [`Content::load`].
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_yaml::from_str(raw)?;
        let mut seen = HashSet::new();
        for project in &content.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
        }
        Ok(content)
    }
}
