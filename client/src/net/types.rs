//! Portfolio content DTOs shared by the client hooks and the server.
//!
//! DESIGN
//! ======
//! Optional presentation fields default when absent so content files can
//! stay sparse; only the identifying fields are required.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Landing section content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// One portfolio project card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Featured projects first, each group keeping its original order.
pub fn featured_first(projects: &[Project]) -> Vec<&Project> {
    let mut ordered: Vec<&Project> = projects.iter().collect();
    ordered.sort_by_key(|p| !p.featured);
    ordered
}
