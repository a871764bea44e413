use super::*;

#[test]
fn site_scope_follows_system_without_teardown_restore() {
    let scope = ThemeScope::site();
    assert!(scope.follows_system);
    assert!(scope.fallback_light);
    assert_eq!(scope.restore_on_teardown, None);
    assert_eq!(scope.storage_key, "theme");
}

#[test]
fn admin_scope_defaults_dark_and_restores_light() {
    let scope = ThemeScope::admin();
    assert!(!scope.follows_system);
    assert!(!scope.fallback_light);
    assert_eq!(scope.restore_on_teardown, Some(true));
}

#[test]
fn scopes_use_distinct_storage_keys() {
    assert_ne!(ThemeScope::site().storage_key, ThemeScope::admin().storage_key);
}

#[test]
fn default_scope_is_site() {
    assert_eq!(ThemeScope::default(), ThemeScope::site());
}
