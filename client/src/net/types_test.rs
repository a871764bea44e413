use super::*;

fn project(id: &str, featured: bool) -> Project {
    Project {
        id: id.to_owned(),
        title: id.to_uppercase(),
        summary: String::new(),
        tags: Vec::new(),
        repo_url: None,
        live_url: None,
        featured,
    }
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn hero_optional_fields_default() {
    let hero: Hero = serde_json::from_str(r#"{"name":"Ada","title":"Engineer"}"#).unwrap();
    assert_eq!(hero.tagline, "");
    assert_eq!(hero.avatar_url, None);
    assert!(hero.links.is_empty());
}

#[test]
fn project_requires_id_and_title() {
    assert!(serde_json::from_str::<Project>(r#"{"title":"x"}"#).is_err());
    let p: Project = serde_json::from_str(r#"{"id":"a","title":"A","tags":["rust"]}"#).unwrap();
    assert_eq!(p.tags, vec!["rust"]);
    assert!(!p.featured);
}

// =============================================================
// featured_first
// =============================================================

#[test]
fn featured_first_is_stable() {
    let projects = vec![project("a", false), project("b", true), project("c", false), project("d", true)];
    let ids: Vec<&str> = featured_first(&projects).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "d", "a", "c"]);
}

#[test]
fn featured_first_empty() {
    assert!(featured_first(&[]).is_empty());
}
